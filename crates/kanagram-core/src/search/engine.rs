//! SearchEngine - ranked fuzzy search over candidate lists

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::result::{ProjectedSearchResult, SearchResult};
use super::strategies::{self, StrategyMatch};
use crate::error::{ConfigError, ConfigResult};
use crate::ngram::ngram_set;
use crate::normalize::normalize;
use crate::similarity::Metric;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Characters per n-gram window (at least 1)
    pub ngram_size: usize,
    /// Minimum similarity a candidate needs to be returned (0.0-1.0)
    pub threshold: f64,
    /// Coefficient used for n-gram scoring
    pub metric: Metric,
    /// Candidate count at which scoring moves to the rayon pool
    pub parallel_threshold: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ngram_size: 2,
            threshold: 0.3,
            metric: Metric::Jaccard,
            parallel_threshold: 1000,
        }
    }
}

impl MatchConfig {
    /// Reject values the engine cannot honor. Nothing is clamped.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.ngram_size < 1 {
            return Err(ConfigError::InvalidNgramSize(self.ngram_size));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults;
    /// unknown fields are an error.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Fuzzy search engine with an immutable configuration
///
/// Every search is a pure function of the query, the candidates and the
/// config. Results are sorted by similarity, highest first; candidates with
/// equal similarity keep their input order.
///
/// With the `parallel` feature, candidate lists at or above
/// `parallel_threshold` are scored on the rayon pool. The output is the same
/// as the sequential path.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: MatchConfig,
}

impl SearchEngine {
    /// Create an engine with n-gram size 2 and threshold 0.3
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: MatchConfig) -> ConfigResult<Self> {
        config.validate()?;
        debug!(
            ngram_size = config.ngram_size,
            threshold = config.threshold,
            metric = %config.metric,
            "search engine configured"
        );
        Ok(Self { config })
    }

    /// Create with the given n-gram size and threshold, other settings default
    pub fn try_new(ngram_size: usize, threshold: f64) -> ConfigResult<Self> {
        Self::with_config(MatchConfig {
            ngram_size,
            threshold,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rank `items` by n-gram similarity to `query`
    pub fn search<S>(&self, query: &str, items: &[S]) -> Vec<SearchResult>
    where
        S: AsRef<str> + Sync,
    {
        let MatchConfig {
            ngram_size, metric, ..
        } = self.config;
        let query_norm = normalize(query);
        let query_grams = ngram_set(&query_norm, ngram_size);

        let mut results = self.evaluate(items, |item| {
            strategies::ngram_match(&query_grams, item, ngram_size, metric)
        });
        rank(&mut results, |r| r.similarity);

        debug!(
            candidates = items.len(),
            matched = results.len(),
            "ngram search complete"
        );
        results
    }

    /// Rank typed records by the similarity of their projected text.
    ///
    /// `text_of` returning `None` scores the record as empty text, so it is
    /// dropped unless the threshold is 0.0 or the query is also empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kanagram_core::SearchEngine;
    ///
    /// struct Book { id: u32, title: String }
    ///
    /// let books = vec![
    ///     Book { id: 5, title: "人間失格".into() },
    ///     Book { id: 6, title: "にんげんしっかく".into() },
    /// ];
    /// let engine = SearchEngine::try_new(2, 0.2).unwrap();
    /// let hits = engine.search_by("しっかく", books, |b| Some(b.title.as_str()));
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].item.id, 6);
    /// ```
    pub fn search_by<T, I, F>(
        &self,
        query: &str,
        items: I,
        text_of: F,
    ) -> Vec<ProjectedSearchResult<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> Option<&str>,
    {
        let MatchConfig {
            ngram_size,
            threshold,
            metric,
            ..
        } = self.config;
        let query_norm = normalize(query);
        let query_grams = ngram_set(&query_norm, ngram_size);

        let mut candidates = 0usize;
        let mut results: Vec<ProjectedSearchResult<T>> = items
            .into_iter()
            .filter_map(|item| {
                candidates += 1;
                let text = text_of(&item).unwrap_or_default().to_string();
                let m = strategies::ngram_match(&query_grams, &text, ngram_size, metric);
                if m.score >= threshold {
                    Some(ProjectedSearchResult {
                        item,
                        text,
                        similarity: m.score,
                    })
                } else {
                    trace!(text = %text, score = m.score, "below threshold");
                    None
                }
            })
            .collect();
        rank(&mut results, |r| r.similarity);

        debug!(
            candidates,
            matched = results.len(),
            "projected search complete"
        );
        results
    }

    /// Rank `items` using exact match, then containment, then n-gram
    /// similarity.
    ///
    /// With `nq`/`ni` the normalized query and item:
    /// - `ni == nq` scores 1.0
    /// - `ni` containing `nq` scores `0.9 * chars(nq) / chars(ni)`
    /// - otherwise the configured n-gram coefficient
    pub fn search_with_partial_match<S>(&self, query: &str, items: &[S]) -> Vec<SearchResult>
    where
        S: AsRef<str> + Sync,
    {
        let MatchConfig {
            ngram_size, metric, ..
        } = self.config;
        let query_norm = normalize(query);
        let query_grams = ngram_set(&query_norm, ngram_size);

        let mut results = self.evaluate(items, |item| {
            strategies::score_partial(&query_norm, &query_grams, item, ngram_size, metric)
        });
        rank(&mut results, |r| r.similarity);

        debug!(
            candidates = items.len(),
            matched = results.len(),
            "partial match search complete"
        );
        results
    }

    /// Score every item and keep those at or above the threshold, in input
    /// order
    fn evaluate<S, F>(&self, items: &[S], score: F) -> Vec<SearchResult>
    where
        S: AsRef<str> + Sync,
        F: Fn(&str) -> StrategyMatch + Sync + Send,
    {
        let threshold = self.config.threshold;
        let keep = |item: &S| -> Option<SearchResult> {
            let text = item.as_ref();
            let m = score(text);
            if m.score >= threshold {
                Some(SearchResult::new(text.to_string(), m.score, m.strategy))
            } else {
                trace!(text, score = m.score, "below threshold");
                None
            }
        };

        #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
        if items.len() >= self.config.parallel_threshold {
            // rayon's collect preserves input order
            return items.par_iter().filter_map(&keep).collect();
        }

        items.iter().filter_map(&keep).collect()
    }
}

/// Sort by similarity descending. `sort_by` is stable, so ties keep input
/// order.
fn rank<R>(results: &mut [R], similarity: impl Fn(&R) -> f64) {
    results.sort_by(|a, b| {
        similarity(b)
            .partial_cmp(&similarity(a))
            .unwrap_or(Ordering::Equal)
    });
}
