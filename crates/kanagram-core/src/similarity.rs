//! Set-based similarity coefficients over n-grams of normalized text.
//!
//! Both coefficients return `1.0` when the two gram sets are empty and `0.0`
//! when exactly one is. Both are symmetric in their arguments.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ngram::{ngram_set, NGramSet};
use crate::normalize::normalize;

/// Size of the intersection, iterating over the smaller set
fn intersection_len(a: &NGramSet<'_>, b: &NGramSet<'_>) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|g| large.contains(*g)).count()
}

/// Degenerate cases shared by both coefficients
fn degenerate(a: &NGramSet<'_>, b: &NGramSet<'_>) -> Option<f64> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Some(1.0),
        (true, false) | (false, true) => Some(0.0),
        (false, false) => None,
    }
}

/// Jaccard coefficient of two prebuilt gram sets: `|A∩B| / |A∪B|`
pub fn jaccard_sets(a: &NGramSet<'_>, b: &NGramSet<'_>) -> f64 {
    if let Some(score) = degenerate(a, b) {
        return score;
    }
    let inter = intersection_len(a, b);
    let union = a.len() + b.len() - inter;
    inter as f64 / union as f64
}

/// Dice coefficient of two prebuilt gram sets: `2|A∩B| / (|A| + |B|)`
pub fn dice_sets(a: &NGramSet<'_>, b: &NGramSet<'_>) -> f64 {
    if let Some(score) = degenerate(a, b) {
        return score;
    }
    let inter = intersection_len(a, b);
    (2 * inter) as f64 / (a.len() + b.len()) as f64
}

/// Jaccard similarity of `a` and `b` over n-grams of their normalized forms.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Example
///
/// ```rust
/// use kanagram_core::similarity::jaccard;
///
/// assert_eq!(jaccard("Microsoft", "ＭＩＣＲＯＳＯＦＴ", 2), 1.0);
/// assert_eq!(jaccard("東京タワー", "東京スカイツリー", 2), 0.1);
/// assert_eq!(jaccard("", "", 2), 1.0);
/// ```
pub fn jaccard(a: &str, b: &str, n: usize) -> f64 {
    let (na, nb) = (normalize(a), normalize(b));
    jaccard_sets(&ngram_set(&na, n), &ngram_set(&nb, n))
}

/// Dice similarity of `a` and `b` over n-grams of their normalized forms.
///
/// More forgiving than [`jaccard`] when one string is much longer than the
/// other or contains it.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn dice(a: &str, b: &str, n: usize) -> f64 {
    let (na, nb) = (normalize(a), normalize(b));
    dice_sets(&ngram_set(&na, n), &ngram_set(&nb, n))
}

/// Coefficient used to compare gram sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Jaccard,
    Dice,
}

impl Metric {
    /// Score two raw strings; normalization happens inside
    pub fn score(self, a: &str, b: &str, n: usize) -> f64 {
        match self {
            Self::Jaccard => jaccard(a, b, n),
            Self::Dice => dice(a, b, n),
        }
    }

    /// Score two prebuilt gram sets
    pub fn score_sets(self, a: &NGramSet<'_>, b: &NGramSet<'_>) -> f64 {
        match self {
            Self::Jaccard => jaccard_sets(a, b),
            Self::Dice => dice_sets(a, b),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jaccard => write!(f, "jaccard"),
            Self::Dice => write!(f, "dice"),
        }
    }
}

impl FromStr for Metric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jaccard" => Ok(Self::Jaccard),
            "dice" => Ok(Self::Dice),
            other => Err(ConfigError::InvalidMetric(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "東京タワー",
        "トウキョウタワー",
        "東京スカイツリー",
        "富士山",
        "ふじさん",
        "Microsoft",
        "ＭＩＣＲＯＳＯＦＴ",
        "a",
        "",
    ];

    #[test]
    fn test_degenerate() {
        assert_eq!(jaccard("", "", 2), 1.0);
        assert_eq!(jaccard("", "x", 2), 0.0);
        assert_eq!(jaccard("x", "", 2), 0.0);
        assert_eq!(dice("", "", 2), 1.0);
        assert_eq!(dice("", "x", 2), 0.0);
    }

    #[test]
    fn test_reflexive() {
        for s in SAMPLES {
            for n in 1..=4 {
                assert_eq!(jaccard(s, s, n), 1.0, "jaccard({s:?}, {s:?}, {n})");
                assert_eq!(dice(s, s, n), 1.0, "dice({s:?}, {s:?}, {n})");
            }
        }
    }

    #[test]
    fn test_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(jaccard(a, b, 2), jaccard(b, a, 2));
                assert_eq!(dice(a, b, 2), dice(b, a, 2));
            }
        }
    }

    #[test]
    fn test_script_variants_are_identical() {
        assert_eq!(jaccard("Microsoft", "ＭＩＣＲＯＳＯＦＴ", 2), 1.0);
        assert_eq!(jaccard("ふじさん", "フジサン", 2), 1.0);
    }

    #[test]
    fn test_known_values() {
        // {東京, 京た, たわ, わー} vs {東京, 京す, すか, かい, いつ, つり, りー}
        let j = jaccard("東京タワー", "東京スカイツリー", 2);
        assert!((j - 1.0 / 10.0).abs() < 1e-12, "got {j}");
        let d = dice("東京タワー", "東京スカイツリー", 2);
        assert!((d - 2.0 / 11.0).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn test_dice_at_least_jaccard() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert!(dice(a, b, 2) >= jaccard(a, b, 2));
            }
        }
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(jaccard("富士山", "ふじさん", 2), 0.0);
    }

    #[test]
    fn test_metric_parse_and_display() {
        assert_eq!("Dice".parse::<Metric>().unwrap(), Metric::Dice);
        assert_eq!(" jaccard ".parse::<Metric>().unwrap(), Metric::Jaccard);
        assert_eq!(Metric::Dice.to_string(), "dice");
        assert!(matches!(
            "cosine".parse::<Metric>(),
            Err(ConfigError::InvalidMetric(m)) if m == "cosine"
        ));
    }

    #[test]
    fn test_metric_score_matches_free_functions() {
        assert_eq!(Metric::Jaccard.score("富士山", "富士", 2), jaccard("富士山", "富士", 2));
        assert_eq!(Metric::Dice.score("富士山", "富士", 2), dice("富士山", "富士", 2));
    }
}
