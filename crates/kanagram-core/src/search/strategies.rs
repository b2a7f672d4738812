//! Scoring strategies
//!
//! Platform-specific implementations:
//! - Native: SIMD substring search via memchr
//! - WASM: Pure Rust fallback

use super::result::MatchStrategy;
use crate::ngram::{ngram_set, NGramSet};
use crate::normalize::normalize;
use crate::similarity::Metric;

/// Weight applied to a containment match before scaling by coverage
pub const CONTAINMENT_WEIGHT: f64 = 0.9;

/// Match result from a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyMatch {
    pub score: f64,
    pub strategy: MatchStrategy,
}

/// Normalized texts are equal (score: 1.0)
#[inline]
pub fn exact_match(query_norm: &str, item_norm: &str) -> Option<StrategyMatch> {
    if query_norm == item_norm {
        Some(StrategyMatch {
            score: 1.0,
            strategy: MatchStrategy::Exact,
        })
    } else {
        None
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

#[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Normalized query is a substring of the normalized item
/// (score: 0.9 × query chars / item chars)
///
/// A short query inside a long candidate scores lower than one covering
/// most of it.
#[inline]
pub fn containment_match(query_norm: &str, item_norm: &str) -> Option<StrategyMatch> {
    if item_norm.is_empty() || !contains(item_norm, query_norm) {
        return None;
    }
    let coverage = query_norm.chars().count() as f64 / item_norm.chars().count() as f64;
    Some(StrategyMatch {
        score: CONTAINMENT_WEIGHT * coverage,
        strategy: MatchStrategy::Substring,
    })
}

/// N-gram coefficient of an already-normalized item against the query grams
#[inline]
pub fn ngram_match_normalized(
    query_grams: &NGramSet<'_>,
    item_norm: &str,
    ngram_size: usize,
    metric: Metric,
) -> StrategyMatch {
    let item_grams = ngram_set(item_norm, ngram_size);
    StrategyMatch {
        score: metric.score_sets(query_grams, &item_grams),
        strategy: MatchStrategy::NGram,
    }
}

/// N-gram coefficient of a raw item against the query grams
#[inline]
pub fn ngram_match(
    query_grams: &NGramSet<'_>,
    item: &str,
    ngram_size: usize,
    metric: Metric,
) -> StrategyMatch {
    ngram_match_normalized(query_grams, &normalize(item), ngram_size, metric)
}

/// Hybrid scoring: exact, then containment, then n-gram coefficient
pub fn score_partial(
    query_norm: &str,
    query_grams: &NGramSet<'_>,
    item: &str,
    ngram_size: usize,
    metric: Metric,
) -> StrategyMatch {
    let item_norm = normalize(item);

    // 1. Exact match
    if let Some(m) = exact_match(query_norm, &item_norm) {
        return m;
    }

    // 2. Containment
    if let Some(m) = containment_match(query_norm, &item_norm) {
        return m;
    }

    // 3. N-gram similarity
    ngram_match_normalized(query_grams, &item_norm, ngram_size, metric)
}
