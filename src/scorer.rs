//! Confidence and relevance scoring for candidate principles.
//!
//! The two scores are independent by design: confidence reflects how the
//! candidate was obtained (detection quality and matrix position), relevance
//! reflects textual similarity between the problem and the principle's own
//! material. Both are surfaced to the caller; neither is collapsed into the
//! other.

use crate::catalog::Principle;
use crate::detector::{DetectedPair, Provenance};
use crate::matcher::TextMatcher;
use crate::matrix::ResolutionKind;

/// Base confidence for a candidate before positional decay.
fn base_confidence(kind: ResolutionKind, pair: &DetectedPair) -> f32 {
    match kind {
        ResolutionKind::Exact => {
            let explicit_sides = [pair.improving.provenance, pair.worsening.provenance]
                .iter()
                .filter(|p| **p == Provenance::Explicit)
                .count();
            match explicit_sides {
                2 => 0.9,
                1 => 0.8,
                _ => 0.7,
            }
        }
        ResolutionKind::Partial => 0.55,
        ResolutionKind::Default => 0.4,
    }
}

/// Positional decay: rank 0 keeps the full base, later ranks fall away
/// monotonically.
fn position_weight(rank: usize) -> f32 {
    1.0 / (1.0 + 0.25 * rank as f32)
}

/// Confidence for a matrix candidate at `rank`, clamped to [0, 1].
pub fn confidence(kind: ResolutionKind, pair: &DetectedPair, rank: usize) -> f32 {
    (base_confidence(kind, pair) * position_weight(rank)).clamp(0.0, 1.0)
}

/// Confidence for a brainstorm pick at `rank`; brainstorm has no matrix
/// backing, so it starts from a fixed middle base.
pub fn brainstorm_confidence(rank: usize) -> f32 {
    (0.6 * position_weight(rank)).clamp(0.0, 1.0)
}

/// Token-overlap relevance between the problem text and the principle's
/// summary, detail, examples, and keywords. Clamped to [0, 1].
pub fn relevance(matcher: &dyn TextMatcher, problem: &str, principle: &Principle) -> f32 {
    matcher.overlap(problem, &principle.corpus).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PrincipleCatalog;
    use crate::detector::DetectedSide;
    use crate::matcher::SubstringMatcher;

    fn pair(improving: Provenance, worsening: Provenance) -> DetectedPair {
        DetectedPair {
            improving: DetectedSide {
                parameter_id: Some(1),
                provenance: improving,
            },
            worsening: DetectedSide {
                parameter_id: Some(14),
                provenance: worsening,
            },
        }
    }

    #[test]
    fn explicit_beats_detected_beats_fallback() {
        let explicit = confidence(
            ResolutionKind::Exact,
            &pair(Provenance::Explicit, Provenance::Explicit),
            0,
        );
        let detected = confidence(
            ResolutionKind::Exact,
            &pair(Provenance::Detected, Provenance::Detected),
            0,
        );
        let partial = confidence(
            ResolutionKind::Partial,
            &pair(Provenance::Detected, Provenance::Unset),
            0,
        );
        let default = confidence(
            ResolutionKind::Default,
            &pair(Provenance::Unset, Provenance::Unset),
            0,
        );
        assert!(explicit > detected);
        assert!(detected > partial);
        assert!(partial > default);
    }

    #[test]
    fn confidence_decays_monotonically_with_rank() {
        let p = pair(Provenance::Explicit, Provenance::Explicit);
        let mut previous = f32::MAX;
        for rank in 0..10 {
            let score = confidence(ResolutionKind::Exact, &p, rank);
            assert!(score < previous, "rank {} did not decay", rank);
            assert!((0.0..=1.0).contains(&score));
            previous = score;
        }
    }

    #[test]
    fn relevance_stays_in_unit_interval() {
        let catalog = PrincipleCatalog::load().unwrap();
        let matcher = SubstringMatcher;
        for principle in catalog.list() {
            let score = relevance(
                &matcher,
                "split the modular housing into independent segments",
                principle,
            );
            assert!((0.0..=1.0).contains(&score), "principle {}", principle.id);
        }
    }

    #[test]
    fn relevant_text_scores_higher_than_unrelated_text() {
        let catalog = PrincipleCatalog::load().unwrap();
        let matcher = SubstringMatcher;
        let segmentation = catalog.get(1).unwrap();
        let on_topic = relevance(
            &matcher,
            "split the system into independent modules",
            segmentation,
        );
        let off_topic = relevance(&matcher, "purple elephants dancing gracefully", segmentation);
        assert!(on_topic > off_topic);
    }
}
