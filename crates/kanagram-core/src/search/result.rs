//! Search result types

use serde::{Deserialize, Serialize};

/// Which scoring rule produced a result's similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Normalized texts are equal
    Exact,
    /// Normalized query occurs inside the normalized candidate
    Substring,
    /// N-gram coefficient
    NGram,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Substring => write!(f, "substring"),
            Self::NGram => write!(f, "ngram"),
        }
    }
}

/// A candidate that cleared the similarity threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub similarity: f64,
    pub strategy: MatchStrategy,
}

impl SearchResult {
    pub(crate) fn new(text: String, similarity: f64, strategy: MatchStrategy) -> Self {
        Self {
            text,
            similarity,
            strategy,
        }
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1}%)", self.text, self.similarity * 100.0)
    }
}

/// A typed record that cleared the similarity threshold, with the text
/// that was extracted from it for scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSearchResult<T> {
    pub item: T,
    pub text: String,
    pub similarity: f64,
}

impl<T> std::fmt::Display for ProjectedSearchResult<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1}%)", self.text, self.similarity * 100.0)
    }
}
