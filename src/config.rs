use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure loaded from triz_mind.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Engine-level knobs for analysis and brainstorm output
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum solutions returned by analyze (1..=10)
    pub max_solutions: usize,
    /// Default export format: "json" or "text"
    pub export_format: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_solutions: 5,
            export_format: "json".to_string(),
        }
    }
}

/// Tuning for free-text parameter detection
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum aggregate keyword score before a parameter counts as detected
    pub min_keyword_score: f32,
    /// Jaro-Winkler similarity floor for fuzzy hint-to-name matching
    pub hint_similarity: f64,
    /// Score bonus applied in brainstorm mode when a principle's category
    /// matches a category inferred from the problem text
    pub category_bonus: f32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_keyword_score: 4.0,
            hint_similarity: 0.88,
            category_bonus: 0.05,
        }
    }
}

/// Session history and favorites persistence
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory; defaults to ~/.triz_mind when unset
    pub data_dir: Option<PathBuf>,
    pub enable_history: bool,
    pub auto_save: bool,
    /// Sessions kept on disk (oldest dropped first)
    pub history_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            enable_history: true,
            auto_save: true,
            history_limit: 100,
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses TRIZ_MIND_CONFIG or defaults to "triz_mind.toml"; a missing file
    /// is not an error, a malformed one is.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("TRIZ_MIND_CONFIG").unwrap_or_else(|_| "triz_mind.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();
        config.clamp();
        Ok(config)
    }

    /// Apply TRIZ_* environment overrides (env-first)
    fn apply_env_overrides(&mut self) {
        if let Some(max) = std::env::var("TRIZ_MAX_SOLUTIONS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            self.engine.max_solutions = max;
        }
        if let Ok(format) = std::env::var("TRIZ_EXPORT_FORMAT") {
            self.engine.export_format = format;
        }
        if let Some(score) = std::env::var("TRIZ_MIN_KEYWORD_SCORE")
            .ok()
            .and_then(|v| v.parse::<f32>().ok())
        {
            self.detection.min_keyword_score = score;
        }
        if let Some(sim) = std::env::var("TRIZ_HINT_SIMILARITY")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
        {
            self.detection.hint_similarity = sim;
        }
        if let Ok(dir) = std::env::var("TRIZ_DATA_DIR") {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(enable) = std::env::var("TRIZ_ENABLE_HISTORY") {
            self.storage.enable_history = enable == "1" || enable.eq_ignore_ascii_case("true");
        }
        if let Ok(auto) = std::env::var("TRIZ_AUTO_SAVE") {
            self.storage.auto_save = auto == "1" || auto.eq_ignore_ascii_case("true");
        }
        if let Some(limit) = std::env::var("TRIZ_HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            self.storage.history_limit = limit;
        }
    }

    /// Clamp everything into safe ranges rather than failing startup
    fn clamp(&mut self) {
        if !(1..=10).contains(&self.engine.max_solutions) {
            tracing::warn!(
                "max_solutions {} out of range, clamping into 1..=10",
                self.engine.max_solutions
            );
            self.engine.max_solutions = self.engine.max_solutions.clamp(1, 10);
        }
        self.detection.min_keyword_score = self.detection.min_keyword_score.clamp(0.0, 100.0);
        self.detection.hint_similarity = self.detection.hint_similarity.clamp(0.0, 1.0);
        self.detection.category_bonus = self.detection.category_bonus.clamp(0.0, 1.0);
        self.storage.history_limit = self.storage.history_limit.clamp(1, 1000);
        let format = self.engine.export_format.to_lowercase();
        if format != "json" && format != "text" {
            tracing::warn!("unknown export format '{}', using json", format);
            self.engine.export_format = "json".to_string();
        } else {
            self.engine.export_format = format;
        }
    }
}
