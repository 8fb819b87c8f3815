//! Free-text keyword matching, isolated behind one interface.
//!
//! Parameter detection, brainstorm categorization, and relevance scoring all
//! go through [`TextMatcher`], so the substring heuristic can be swapped for
//! a different matcher without touching resolver or ranker logic.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Scoring interface over free text.
pub trait TextMatcher: Send + Sync {
    /// Aggregate match score of `keywords` against `text`. Longer keywords
    /// are more specific and weigh more; 0.0 means no keyword hit.
    fn keyword_score(&self, text: &str, keywords: &[&str]) -> f32;

    /// Token-overlap ratio between two texts in [0, 1].
    fn overlap(&self, left: &str, right: &str) -> f32;
}

/// Default matcher: case-insensitive substring hits weighted by keyword
/// length, and overlap-coefficient token similarity.
#[derive(Debug, Default)]
pub struct SubstringMatcher;

impl TextMatcher for SubstringMatcher {
    fn keyword_score(&self, text: &str, keywords: &[&str]) -> f32 {
        let lower = text.to_lowercase();
        keywords
            .iter()
            .filter(|kw| lower.contains(&kw.to_lowercase()))
            .map(|kw| kw.len() as f32)
            .sum()
    }

    fn overlap(&self, left: &str, right: &str) -> f32 {
        let a = token_set(left);
        let b = token_set(right);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let shared = a.intersection(&b).count() as f32;
        let floor = a.len().min(b.len()) as f32;
        (shared / floor).clamp(0.0, 1.0)
    }
}

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("valid token regex"));

/// Common words carrying no topical signal, skipped during tokenization.
const STOPWORDS: &[&str] = &[
    "the", "and", "but", "for", "with", "that", "this", "are", "was", "has", "have", "had", "not",
    "its", "our", "their", "must", "should", "would", "could", "can", "will", "need", "needs",
    "into", "from", "when", "while", "than", "then", "them", "they", "you", "your", "more", "less",
    "very", "too", "also", "all", "any", "how", "what", "which", "where", "without", "because",
];

/// Lowercased alphanumeric tokens of length >= 3, minus stopwords.
pub fn token_set(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|t| t.len() >= 3 && !STOPWORDS.contains(&t.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_score_weighs_longer_keywords_higher() {
        let matcher = SubstringMatcher;
        let short = matcher.keyword_score("the big machine", &["big"]);
        let long = matcher.keyword_score("the automated machine", &["automated"]);
        assert!(long > short);
    }

    #[test]
    fn keyword_score_is_case_insensitive() {
        let matcher = SubstringMatcher;
        assert!(matcher.keyword_score("REDUCE THE WEIGHT", &["weight"]) > 0.0);
        assert_eq!(matcher.keyword_score("nothing relevant here", &["weight"]), 0.0);
    }

    #[test]
    fn overlap_bounds() {
        let matcher = SubstringMatcher;
        let same = matcher.overlap("modular battery design", "modular battery design");
        assert!((same - 1.0).abs() < f32::EPSILON);
        assert_eq!(matcher.overlap("", "modular design"), 0.0);
        let partial = matcher.overlap("modular battery", "modular enclosure");
        assert!(partial > 0.0 && partial < 1.0);
    }

    #[test]
    fn token_set_drops_stopwords_and_short_tokens() {
        let tokens = token_set("The pump must not fail at 40 psi");
        assert!(tokens.contains("pump"));
        assert!(tokens.contains("fail"));
        assert!(tokens.contains("psi"));
        assert!(!tokens.contains("the"));
        assert!(!tokens.contains("at"));
        assert!(!tokens.contains("40"));
    }
}
