//! Script, width and case folding
//!
//! Maps a string to a canonical spelling one Unicode scalar at a time.
//! Rules are checked in order and the first match wins:
//!
//! 1. Katakana `ァ`..`ヶ` (U+30A1–U+30F6) → hiragana `ぁ`..`ゖ`
//! 2. Full-width `Ａ`..`Ｚ` → `a`..`z`
//! 3. Full-width `ａ`..`ｚ` → `a`..`z`
//! 4. Full-width `０`..`９` → `0`..`9`
//! 5. ASCII `A`..`Z` → `a`..`z`
//!
//! Everything else passes through. Ranges are fixed code points, so the
//! output never depends on locale.
//!
//! # Example
//!
//! ```rust
//! use kanagram_core::normalize::normalize;
//!
//! assert_eq!(normalize("トウキョウタワー"), "とうきょうたわー");
//! assert_eq!(normalize("１２３ABC"), "123abc");
//! ```

/// Distance between a katakana letter and its hiragana counterpart
const KANA_OFFSET: u32 = 0x60;

const KATAKANA_FIRST: char = '\u{30A1}'; // ァ
const KATAKANA_LAST: char = '\u{30F6}'; // ヶ

const FULLWIDTH_UPPER_A: char = '\u{FF21}'; // Ａ
const FULLWIDTH_UPPER_Z: char = '\u{FF3A}'; // Ｚ
const FULLWIDTH_LOWER_A: char = '\u{FF41}'; // ａ
const FULLWIDTH_LOWER_Z: char = '\u{FF5A}'; // ｚ
const FULLWIDTH_DIGIT_0: char = '\u{FF10}'; // ０
const FULLWIDTH_DIGIT_9: char = '\u{FF19}'; // ９

#[inline]
fn shift(c: char, from: char, to: char) -> char {
    char::from_u32(c as u32 - from as u32 + to as u32).unwrap_or(c)
}

#[inline]
fn katakana_char(c: char) -> Option<char> {
    if (KATAKANA_FIRST..=KATAKANA_LAST).contains(&c) {
        char::from_u32(c as u32 - KANA_OFFSET)
    } else {
        None
    }
}

/// Apply the folding rules to a single character
#[inline]
pub fn normalize_char(c: char) -> char {
    if let Some(h) = katakana_char(c) {
        return h;
    }
    match c {
        FULLWIDTH_UPPER_A..=FULLWIDTH_UPPER_Z => shift(c, FULLWIDTH_UPPER_A, 'a'),
        FULLWIDTH_LOWER_A..=FULLWIDTH_LOWER_Z => shift(c, FULLWIDTH_LOWER_A, 'a'),
        FULLWIDTH_DIGIT_0..=FULLWIDTH_DIGIT_9 => shift(c, FULLWIDTH_DIGIT_0, '0'),
        'A'..='Z' => c.to_ascii_lowercase(),
        _ => c,
    }
}

/// Fold katakana, full-width alphanumerics and ASCII capitals into one
/// canonical spelling.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    input.chars().map(normalize_char).collect()
}

/// [`normalize`] for optional text; `None` becomes the empty string.
pub fn normalize_opt(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}

/// Katakana → hiragana only, leaving width and case alone.
pub fn katakana_to_hiragana(input: &str) -> String {
    input
        .chars()
        .map(|c| katakana_char(c).unwrap_or(c))
        .collect()
}

/// True when [`normalize`] would return `input` unchanged.
pub fn is_normalized(input: &str) -> bool {
    input.chars().all(|c| normalize_char(c) == c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(katakana_to_hiragana(""), "");
        assert_eq!(normalize_opt(None), "");
    }

    #[test]
    fn test_katakana_folds_to_hiragana() {
        assert_eq!(normalize("トウキョウタワー"), "とうきょうたわー");
        assert_eq!(normalize("フジサン"), "ふじさん");
    }

    #[test]
    fn test_katakana_range_edges() {
        assert_eq!(normalize_char('ァ'), 'ぁ');
        assert_eq!(normalize_char('ヶ'), 'ゖ');
        // Outside the range: prolonged sound mark and middle dot
        assert_eq!(normalize_char('ー'), 'ー');
        assert_eq!(normalize_char('・'), '・');
        assert_eq!(normalize_char('ヷ'), 'ヷ');
    }

    #[test]
    fn test_width_and_case() {
        assert_eq!(normalize("１２３ABC"), "123abc");
        assert_eq!(normalize("ＭＩＣＲＯＳＯＦＴ"), "microsoft");
        assert_eq!(normalize("ｍｉｃｒｏ"), "micro");
        assert_eq!(normalize("Microsoft Office"), "microsoft office");
    }

    #[test]
    fn test_fullwidth_ranges_map_onto_ascii() {
        let upper: String = (FULLWIDTH_UPPER_A..=FULLWIDTH_UPPER_Z).collect();
        let lower: String = (FULLWIDTH_LOWER_A..=FULLWIDTH_LOWER_Z).collect();
        let digits: String = (FULLWIDTH_DIGIT_0..=FULLWIDTH_DIGIT_9).collect();
        assert_eq!(normalize(&upper), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(normalize(&lower), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(normalize(&digits), "0123456789");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize("東京　富士山!"), "東京　富士山!");
        // Non-ASCII capitals are left alone; folding is range based only
        assert_eq!(normalize("ÀÉ"), "ÀÉ");
    }

    #[test]
    fn test_katakana_to_hiragana_only_folds_script() {
        assert_eq!(katakana_to_hiragana("ＴＯＫＹＯタワーABC"), "ＴＯＫＹＯたわーABC");
    }

    #[test]
    fn test_idempotent() {
        for s in ["トウキョウタワー", "ＭＩＣＲＯＳＯＦＴ　ＯＦＦＩＣＥ", "１２３ABC", "吾輩は猫である", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
            assert!(is_normalized(&once));
        }
        assert!(!is_normalized("カナ"));
    }
}
