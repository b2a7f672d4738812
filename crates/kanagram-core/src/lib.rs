//! kanagram Core Engine
//!
//! Fuzzy matching for Japanese-mixed text. Strings are folded to one
//! canonical spelling (katakana → hiragana, full-width → half-width,
//! upper → lower), cut into n-grams, and compared with Jaccard or Dice
//! coefficients. A search engine ranks candidate lists on top of that.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated substring search via memchr
//! - `parallel` - Parallel scoring via rayon for large candidate lists
//!
//! # Example
//!
//! ```rust
//! use kanagram_core::{normalize, ngrams, jaccard, SearchEngine};
//!
//! assert_eq!(normalize("トウキョウタワー"), "とうきょうたわー");
//! assert_eq!(ngrams("東京タワー", 2), vec!["東京", "京タ", "タワ", "ワー"]);
//! assert_eq!(jaccard("ふじさん", "フジサン", 2), 1.0);
//!
//! let engine = SearchEngine::try_new(2, 0.9).unwrap();
//! let matches = engine.search("東京タワー", &["東京タワー", "東京スカイツリー"]);
//! assert_eq!(matches.len(), 1);
//! ```

pub mod error;
pub mod ngram;
pub mod normalize;
pub mod search;
pub mod similarity;

// Re-export main types at crate root
pub use error::{ConfigError, ConfigResult};
pub use ngram::{ngram_set, ngrams, NGramSet};
pub use normalize::{is_normalized, katakana_to_hiragana, normalize, normalize_char, normalize_opt};
pub use search::{MatchConfig, MatchStrategy, ProjectedSearchResult, SearchEngine, SearchResult};
pub use similarity::{dice, dice_sets, jaccard, jaccard_sets, Metric};
