//! Deterministic one-line solution descriptions.
//!
//! Templates contextualize a principle against the detected contradiction;
//! identical inputs always render identical text.

use crate::catalog::{Parameter, Principle};

/// Render the description line for a solution.
pub fn describe(
    principle: &Principle,
    improving: Option<&Parameter>,
    worsening: Option<&Parameter>,
) -> String {
    let name = &principle.name;
    let summary = principle.summary.to_lowercase();
    match (improving, worsening) {
        (Some(imp), Some(wor)) => format!(
            "Apply {name} ({summary}) to improve {} without giving up {}",
            imp.name, wor.name
        ),
        (Some(imp), None) => format!("Apply {name} ({summary}) to improve {}", imp.name),
        (None, Some(wor)) => format!(
            "Apply {name} ({summary}) while containing the impact on {}",
            wor.name
        ),
        (None, None) => format!("Consider {name}: {summary}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ParameterCatalog, PrincipleCatalog};

    #[test]
    fn description_names_both_parameters_when_known() {
        let principles = PrincipleCatalog::load().unwrap();
        let parameters = ParameterCatalog::load().unwrap();
        let text = describe(
            principles.get(1).unwrap(),
            parameters.get(1),
            parameters.get(14),
        );
        assert!(text.contains("Segmentation"));
        assert!(text.contains("weight of moving object"));
        assert!(text.contains("strength"));
    }

    #[test]
    fn description_degrades_without_parameters() {
        let principles = PrincipleCatalog::load().unwrap();
        let text = describe(principles.get(35).unwrap(), None, None);
        assert!(text.starts_with("Consider Parameter changes"));
    }
}
