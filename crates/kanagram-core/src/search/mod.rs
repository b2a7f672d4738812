//! Ranked Fuzzy Search
//!
//! Scores a candidate list against a query and returns the candidates that
//! clear the configured threshold, most similar first.
//!
//! - **Native**: optional SIMD containment check and parallel scoring
//! - **WASM**: sequential scoring with pure-Rust algorithms
//!
//! # Variants
//!
//! 1. [`SearchEngine::search`] - n-gram coefficient only
//! 2. [`SearchEngine::search_by`] - same, over text projected from records
//! 3. [`SearchEngine::search_with_partial_match`] - exact (1.0), then
//!    containment (0.9 scaled by coverage), then n-gram coefficient
//!
//! # Example
//!
//! ```rust
//! use kanagram_core::search::SearchEngine;
//!
//! let engine = SearchEngine::new();
//! let matches = engine.search_with_partial_match("ふじ", &["富士山", "ふじさん", "フジサン"]);
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].text, "ふじさん");
//! ```

mod engine;
mod result;
pub mod strategies;

pub use engine::{MatchConfig, SearchEngine};
pub use result::{MatchStrategy, ProjectedSearchResult, SearchResult};
