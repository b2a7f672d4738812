//! N-gram tokenizer
//!
//! Slides a window of `n` Unicode scalars across the text one position at a
//! time. Windows borrow from the input, so no per-gram allocation happens.
//!
//! Text shorter than the window yields the whole text as its only gram.
//! This keeps short strings comparable instead of producing an empty set.

use ahash::AHashSet;

/// Deduplicated n-grams borrowed from a source string
pub type NGramSet<'a> = AHashSet<&'a str>;

/// Split `text` into overlapping windows of `n` characters, left to right.
///
/// Duplicates are kept; use [`ngram_set`] for the deduplicated form.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Example
///
/// ```rust
/// use kanagram_core::ngram::ngrams;
///
/// assert_eq!(ngrams("東京タワー", 2), vec!["東京", "京タ", "タワ", "ワー"]);
/// assert_eq!(ngrams("a", 2), vec!["a"]);
/// ```
pub fn ngrams(text: &str, n: usize) -> Vec<&str> {
    assert!(n >= 1, "n-gram size must be at least 1");

    if text.is_empty() {
        return Vec::new();
    }

    // Byte offset of every char boundary, including the end of the string
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = bounds.len() - 1;

    if char_len < n {
        return vec![text];
    }

    (0..=char_len - n)
        .map(|start| &text[bounds[start]..bounds[start + n]])
        .collect()
}

/// Deduplicated n-grams of `text`
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn ngram_set(text: &str, n: usize) -> NGramSet<'_> {
    ngrams(text, n).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bigrams_count_scalars_not_bytes() {
        assert_eq!(ngrams("東京タワー", 2), vec!["東京", "京タ", "タワ", "ワー"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(ngrams("", 2).is_empty());
        assert!(ngram_set("", 3).is_empty());
    }

    #[test]
    fn test_short_text_fallback() {
        assert_eq!(ngrams("a", 2), vec!["a"]);
        assert_eq!(ngrams("富士", 3), vec!["富士"]);
    }

    #[test]
    fn test_exact_length_is_one_window() {
        assert_eq!(ngrams("ab", 2), vec!["ab"]);
    }

    #[test]
    fn test_unigrams() {
        assert_eq!(ngrams("abc", 1), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_kept_in_sequence_but_not_set() {
        let grams = ngrams("ああああ", 2);
        assert_eq!(grams, vec!["ああ", "ああ", "ああ"]);
        assert_eq!(ngram_set("ああああ", 2).len(), 1);
    }

    #[test]
    fn test_window_count() {
        let text = "わがはいはねこである";
        for n in 1..=10 {
            assert_eq!(ngrams(text, n).len(), text.chars().count() - n + 1);
        }
    }

    #[test]
    #[should_panic(expected = "n-gram size must be at least 1")]
    fn test_zero_size() {
        ngrams("abc", 0);
    }
}
