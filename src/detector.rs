//! Best-effort detection of the two engineering parameters in conflict.
//!
//! Detection never fails: a side that cannot be resolved confidently stays
//! unset and downstream resolution degrades through the matrix fallback
//! chain instead of erroring.

use crate::catalog::ParameterCatalog;
use crate::config::DetectionConfig;
use crate::matcher::TextMatcher;
use serde::Serialize;

/// Where a resolved parameter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Caller-supplied hint matched a parameter name or alias.
    Explicit,
    /// Inferred from the problem text by keyword scan.
    Detected,
    /// No confident match.
    #[serde(rename = "none")]
    Unset,
}

/// One side of the contradiction (improving or worsening).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectedSide {
    pub parameter_id: Option<u8>,
    pub provenance: Provenance,
}

impl DetectedSide {
    fn unset() -> Self {
        Self {
            parameter_id: None,
            provenance: Provenance::Unset,
        }
    }
}

/// Detection result for a problem statement.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectedPair {
    pub improving: DetectedSide,
    pub worsening: DetectedSide,
}

/// Keyword-driven parameter detector.
#[derive(Debug)]
pub struct ParameterDetector {
    config: DetectionConfig,
}

impl ParameterDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Resolve both sides from optional hints plus the problem text.
    pub fn detect(
        &self,
        catalog: &ParameterCatalog,
        matcher: &dyn TextMatcher,
        text: &str,
        improving_hint: Option<&str>,
        worsening_hint: Option<&str>,
    ) -> DetectedPair {
        let improving_hinted = improving_hint.and_then(|h| self.resolve_hint(catalog, h));
        let mut worsening_hinted = worsening_hint.and_then(|h| self.resolve_hint(catalog, h));

        // Both hints landing on one parameter is a collision; the improving
        // side wins and the other falls through to text detection.
        if improving_hinted.is_some() && improving_hinted == worsening_hinted {
            worsening_hinted = None;
        }

        let mut ranked = self.rank_text_candidates(catalog, matcher, text);
        ranked.retain(|&(id, _)| Some(id) != improving_hinted && Some(id) != worsening_hinted);

        let mut next_detected = ranked.into_iter().map(|(id, _)| id);

        let improving = match improving_hinted {
            Some(id) => DetectedSide {
                parameter_id: Some(id),
                provenance: Provenance::Explicit,
            },
            None => match next_detected.next() {
                Some(id) => DetectedSide {
                    parameter_id: Some(id),
                    provenance: Provenance::Detected,
                },
                None => DetectedSide::unset(),
            },
        };
        let worsening = match worsening_hinted {
            Some(id) => DetectedSide {
                parameter_id: Some(id),
                provenance: Provenance::Explicit,
            },
            None => match next_detected.next() {
                Some(id) => DetectedSide {
                    parameter_id: Some(id),
                    provenance: Provenance::Detected,
                },
                None => DetectedSide::unset(),
            },
        };

        DetectedPair {
            improving,
            worsening,
        }
    }

    /// Match a hint string against parameter names and aliases.
    /// Order: exact name match, alias containment, fuzzy name match.
    fn resolve_hint(&self, catalog: &ParameterCatalog, hint: &str) -> Option<u8> {
        let hint = hint.trim().to_lowercase();
        if hint.is_empty() {
            return None;
        }

        for param in catalog.list() {
            if param.name == hint {
                return Some(param.id);
            }
        }

        // Alias containment, best match = longest alias involved.
        let mut best: Option<(usize, u8)> = None;
        for param in catalog.list() {
            for alias in &param.aliases {
                if hint.contains(alias.as_str()) || alias.contains(&hint) {
                    let specificity = alias.len();
                    let better = match best {
                        Some((len, id)) => {
                            specificity > len || (specificity == len && param.id < id)
                        }
                        None => true,
                    };
                    if better {
                        best = Some((specificity, param.id));
                    }
                }
            }
        }
        if let Some((_, id)) = best {
            return Some(id);
        }

        // Tolerate misspelled hints with a fuzzy pass over canonical names.
        let mut fuzzy: Option<(f64, u8)> = None;
        for param in catalog.list() {
            let similarity = strsim::jaro_winkler(&hint, &param.name);
            if similarity >= self.config.hint_similarity {
                let better = match fuzzy {
                    Some((s, id)) => similarity > s || (similarity == s && param.id < id),
                    None => true,
                };
                if better {
                    fuzzy = Some((similarity, param.id));
                }
            }
        }
        fuzzy.map(|(_, id)| id)
    }

    /// Score every parameter's alias set against the text; keep those above
    /// the confidence threshold, strongest first (score desc, id asc).
    fn rank_text_candidates(
        &self,
        catalog: &ParameterCatalog,
        matcher: &dyn TextMatcher,
        text: &str,
    ) -> Vec<(u8, f32)> {
        let mut scored: Vec<(u8, f32)> = catalog
            .list()
            .iter()
            .map(|param| {
                let keywords: Vec<&str> = param.aliases.iter().map(|a| a.as_str()).collect();
                (param.id, matcher.keyword_score(text, &keywords))
            })
            .filter(|&(_, score)| score >= self.config.min_keyword_score)
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SubstringMatcher;

    fn detector() -> (ParameterDetector, ParameterCatalog, SubstringMatcher) {
        (
            ParameterDetector::new(DetectionConfig::default()),
            ParameterCatalog::load().unwrap(),
            SubstringMatcher,
        )
    }

    #[test]
    fn explicit_hints_resolve_by_exact_name() {
        let (detector, catalog, matcher) = detector();
        let pair = detector.detect(
            &catalog,
            &matcher,
            "irrelevant",
            Some("Weight of Moving Object"),
            Some("strength"),
        );
        assert_eq!(pair.improving.parameter_id, Some(1));
        assert_eq!(pair.improving.provenance, Provenance::Explicit);
        assert_eq!(pair.worsening.parameter_id, Some(14));
        assert_eq!(pair.worsening.provenance, Provenance::Explicit);
    }

    #[test]
    fn misspelled_hint_resolves_fuzzily() {
        let (detector, catalog, matcher) = detector();
        let pair = detector.detect(&catalog, &matcher, "", Some("strengh"), None);
        assert_eq!(pair.improving.parameter_id, Some(14));
    }

    #[test]
    fn colliding_hints_keep_improving_side() {
        let (detector, catalog, matcher) = detector();
        let pair = detector.detect(&catalog, &matcher, "", Some("speed"), Some("velocity"));
        assert_eq!(pair.improving.parameter_id, Some(9));
        assert_ne!(pair.worsening.parameter_id, Some(9));
    }

    #[test]
    fn text_detection_finds_two_distinct_parameters() {
        let (detector, catalog, matcher) = detector();
        let pair = detector.detect(
            &catalog,
            &matcher,
            "the drone battery drains fast but the frame must stay lightweight",
            None,
            None,
        );
        assert_eq!(pair.improving.provenance, Provenance::Detected);
        assert_eq!(pair.worsening.provenance, Provenance::Detected);
        let (a, b) = (pair.improving.parameter_id, pair.worsening.parameter_id);
        assert!(a.is_some() && b.is_some());
        assert_ne!(a, b);
    }

    #[test]
    fn unrelated_text_leaves_both_sides_unset() {
        let (detector, catalog, matcher) = detector();
        let pair = detector.detect(&catalog, &matcher, "lorem ipsum dolor sit", None, None);
        assert_eq!(pair.improving.parameter_id, None);
        assert_eq!(pair.improving.provenance, Provenance::Unset);
        assert_eq!(pair.worsening.parameter_id, None);
    }

    #[test]
    fn detection_is_deterministic() {
        let (detector, catalog, matcher) = detector();
        let text = "reduce the weight of the arm while keeping it sturdy and rigid";
        let first = detector.detect(&catalog, &matcher, text, None, None);
        for _ in 0..5 {
            let again = detector.detect(&catalog, &matcher, text, None, None);
            assert_eq!(first.improving.parameter_id, again.improving.parameter_id);
            assert_eq!(first.worsening.parameter_id, again.worsening.parameter_id);
        }
    }
}
