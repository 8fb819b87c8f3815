//! Export formatting for solution lists: JSON and plain-text report.

use crate::engine::Solution;
use crate::error::{Result, TrizMindError};
use chrono::Utc;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
}

impl FromStr for ExportFormat {
    type Err = TrizMindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(TrizMindError::InvalidParams {
                message: format!("unknown export format '{other}' (expected json or text)"),
            }),
        }
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    timestamp: String,
    solution_count: usize,
    solutions: &'a [Solution],
}

/// Render a solution list in the requested format.
pub fn render(solutions: &[Solution], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let export = JsonExport {
                timestamp: Utc::now().to_rfc3339(),
                solution_count: solutions.len(),
                solutions,
            };
            Ok(serde_json::to_string_pretty(&export)?)
        }
        ExportFormat::Text => Ok(render_text(solutions)),
    }
}

fn render_text(solutions: &[Solution]) -> String {
    let mut lines = Vec::new();
    lines.push("TRIZ Innovation Solutions Report".to_string());
    lines.push("=".repeat(50));
    lines.push(format!(
        "Generated: {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("Solutions: {}", solutions.len()));
    lines.push(String::new());

    for (i, solution) in solutions.iter().enumerate() {
        lines.push(format!("Solution {}: {}", i + 1, solution.principle_name));
        lines.push(format!("Description: {}", solution.description));
        lines.push(format!("Confidence: {:.0}%", solution.confidence * 100.0));
        lines.push(format!("Relevance: {:.0}%", solution.relevance * 100.0));
        lines.push(format!("Examples: {}", solution.examples.join(", ")));
        lines.push("-".repeat(30));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::TrizEngine;

    fn sample_solutions() -> Vec<Solution> {
        let engine = TrizEngine::new(Config::default()).unwrap();
        engine.brainstorm("reduce machine vibration", 3)
    }

    #[test]
    fn json_export_parses_and_counts() {
        let solutions = sample_solutions();
        let rendered = render(&solutions, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["solution_count"], 3);
        assert_eq!(value["solutions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn text_export_has_one_block_per_solution() {
        let solutions = sample_solutions();
        let rendered = render(&solutions, ExportFormat::Text).unwrap();
        assert!(rendered.starts_with("TRIZ Innovation Solutions Report"));
        assert_eq!(rendered.matches("Solution ").count(), 3);
    }

    #[test]
    fn format_parsing_rejects_unknown_names() {
        assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("txt").unwrap(), ExportFormat::Text);
        assert!(ExportFormat::from_str("yaml").is_err());
    }
}
