//! The engine context object: catalogs, matrix, detector, and index built
//! once, then shared immutably by every operation.
//!
//! All methods take `&self` and are pure over the loaded data, so one engine
//! can serve any number of concurrent callers without locks.

use crate::catalog::{ParameterCatalog, Principle, PrincipleCatalog};
use crate::config::Config;
use crate::describe;
use crate::detector::{DetectedPair, ParameterDetector};
use crate::error::Result;
use crate::matcher::{SubstringMatcher, TextMatcher};
use crate::matrix::ContradictionMatrix;
use crate::ranker::{self, RankedCandidate};
use crate::scorer;
use crate::search::SearchIndex;
use serde::{Deserialize, Serialize};

/// One ranked solution. Ephemeral: computed per call, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub principle_id: u8,
    pub principle_name: String,
    pub category: String,
    pub description: String,
    pub confidence: f32,
    pub relevance: f32,
    pub examples: Vec<String>,
    pub detailed_explanation: String,
    pub tags: Vec<String>,
}

impl Solution {
    fn build(
        principle: &Principle,
        description: String,
        confidence: f32,
        relevance: f32,
    ) -> Self {
        Self {
            principle_id: principle.id,
            principle_name: principle.name.clone(),
            category: principle.category.clone(),
            description,
            confidence: confidence.clamp(0.0, 1.0),
            relevance: relevance.clamp(0.0, 1.0),
            examples: principle.examples.clone(),
            detailed_explanation: principle.detail.clone(),
            tags: principle.keywords.iter().take(3).cloned().collect(),
        }
    }
}

/// Full result of an analyze call: what was detected plus the solutions.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub improving: Option<ResolvedParameter>,
    pub worsening: Option<ResolvedParameter>,
    pub solutions: Vec<Solution>,
}

/// A detected parameter as shown to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedParameter {
    pub id: u8,
    pub name: String,
    pub provenance: crate::detector::Provenance,
}

/// Immutable engine built once at startup.
pub struct TrizEngine {
    config: Config,
    parameters: ParameterCatalog,
    principles: PrincipleCatalog,
    matrix: ContradictionMatrix,
    detector: ParameterDetector,
    index: SearchIndex,
    matcher: Box<dyn TextMatcher>,
}

impl TrizEngine {
    /// Build and validate the engine with the default substring matcher.
    /// Any knowledge-base violation surfaces here as `DataIntegrity`.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_matcher(config, Box::new(SubstringMatcher))
    }

    /// Build with a custom text matcher behind the scoring seam.
    pub fn with_matcher(config: Config, matcher: Box<dyn TextMatcher>) -> Result<Self> {
        let parameters = ParameterCatalog::load()?;
        let principles = PrincipleCatalog::load()?;
        let matrix = ContradictionMatrix::load()?;
        let detector = ParameterDetector::new(config.detection.clone());
        let index = SearchIndex::build(&principles);
        tracing::debug!(
            parameters = parameters.list().len(),
            principles = principles.list().len(),
            "knowledge base loaded"
        );
        Ok(Self {
            config,
            parameters,
            principles,
            matrix,
            detector,
            index,
            matcher,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parameters(&self) -> &ParameterCatalog {
        &self.parameters
    }

    /// Analyze a problem statement: detect the contradiction, resolve the
    /// matrix, score and rank. Degrades to fallback-derived low-confidence
    /// solutions instead of failing on unparseable text.
    pub fn analyze(
        &self,
        problem: &str,
        improving_hint: Option<&str>,
        worsening_hint: Option<&str>,
    ) -> Analysis {
        let pair = self.detector.detect(
            &self.parameters,
            self.matcher.as_ref(),
            problem,
            improving_hint,
            worsening_hint,
        );
        let resolution = self
            .matrix
            .resolve(pair.improving.parameter_id, pair.worsening.parameter_id);
        tracing::debug!(
            improving = ?pair.improving.parameter_id,
            worsening = ?pair.worsening.parameter_id,
            kind = ?resolution.kind,
            candidates = resolution.candidates.len(),
            "contradiction resolved"
        );

        let ranked: Vec<RankedCandidate> = resolution
            .candidates
            .iter()
            .filter_map(|&candidate| {
                let principle = self.principles.get(candidate.principle_id as u32).ok()?;
                Some(RankedCandidate {
                    candidate,
                    relevance: scorer::relevance(self.matcher.as_ref(), problem, principle),
                })
            })
            .collect();

        let improving_param = pair.improving.parameter_id.and_then(|id| self.parameters.get(id));
        let worsening_param = pair.worsening.parameter_id.and_then(|id| self.parameters.get(id));

        let solutions: Vec<Solution> = ranker::analysis_order(ranked)
            .into_iter()
            .take(self.config.engine.max_solutions)
            .filter_map(|item| {
                let principle = self
                    .principles
                    .get(item.candidate.principle_id as u32)
                    .ok()?;
                let confidence = scorer::confidence(resolution.kind, &pair, item.candidate.rank);
                let description = describe::describe(principle, improving_param, worsening_param);
                Some(Solution::build(
                    principle,
                    description,
                    confidence,
                    item.relevance,
                ))
            })
            .collect();

        Analysis {
            improving: self.resolved_parameter(&pair, true),
            worsening: self.resolved_parameter(&pair, false),
            solutions,
        }
    }

    /// Diversified idea generation. `count` is clamped into 1..=40; the
    /// result holds exactly `min(count, 40)` distinct principles.
    pub fn brainstorm(&self, problem: &str, count: usize) -> Vec<Solution> {
        let picks = ranker::brainstorm_select(
            &self.principles,
            self.matcher.as_ref(),
            problem,
            count,
            self.config.detection.category_bonus,
        );
        picks
            .into_iter()
            .enumerate()
            .map(|(rank, principle)| {
                let relevance = scorer::relevance(self.matcher.as_ref(), problem, principle);
                let confidence = scorer::brainstorm_confidence(rank);
                let description = describe::describe(principle, None, None);
                Solution::build(principle, description, confidence, relevance)
            })
            .collect()
    }

    /// All 40 principles in id order.
    pub fn list_principles(&self) -> &[Principle] {
        self.principles.list()
    }

    /// Direct lookup; ids outside 1..=40 are `NotFound`.
    pub fn principle(&self, id: u32) -> Result<&Principle> {
        self.principles.get(id)
    }

    /// Case-insensitive catalog search; empty query lists everything.
    pub fn search_principles(&self, query: &str) -> Vec<&Principle> {
        self.index
            .search(query)
            .into_iter()
            .filter_map(|id| self.principles.get(id as u32).ok())
            .collect()
    }

    fn resolved_parameter(&self, pair: &DetectedPair, improving: bool) -> Option<ResolvedParameter> {
        let side = if improving {
            pair.improving
        } else {
            pair.worsening
        };
        let id = side.parameter_id?;
        let parameter = self.parameters.get(id)?;
        Some(ResolvedParameter {
            id,
            name: parameter.name.clone(),
            provenance: side.provenance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_builds_from_default_config() {
        let engine = TrizEngine::new(Config::default()).expect("embedded data is valid");
        assert_eq!(engine.list_principles().len(), 40);
    }

    #[test]
    fn analyze_with_explicit_pair_uses_the_exact_cell() {
        let engine = TrizEngine::new(Config::default()).unwrap();
        let analysis = engine.analyze(
            "make the robot arm lighter without losing strength",
            Some("weight of moving object"),
            Some("strength"),
        );
        let ids: Vec<u8> = analysis.solutions.iter().map(|s| s.principle_id).collect();
        assert_eq!(ids, vec![28, 27, 18, 40]);
        assert!(analysis.solutions[0].confidence > analysis.solutions[3].confidence);
    }

    #[test]
    fn analyze_never_fails_on_nonsense() {
        let engine = TrizEngine::new(Config::default()).unwrap();
        let analysis = engine.analyze("xyzzy plugh", None, None);
        assert!(analysis.improving.is_none());
        assert!(analysis.worsening.is_none());
        assert!(!analysis.solutions.is_empty(), "default fallback applies");
        for solution in &analysis.solutions {
            assert!(solution.confidence <= 0.4);
        }
    }

    #[test]
    fn brainstorm_count_is_clamped() {
        let engine = TrizEngine::new(Config::default()).unwrap();
        assert_eq!(engine.brainstorm("speed up the pump", 0).len(), 1);
        assert_eq!(engine.brainstorm("speed up the pump", 100).len(), 40);
    }
}
