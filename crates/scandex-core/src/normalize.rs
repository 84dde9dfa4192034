//! OCR text normalization.
//!
//! Turns a raw recognizer dump into candidate name tokens. The character
//! filter is the strict variant: Latin letters, Japanese syllabary/kanji
//! ranges, hyphen, and space only — digits and punctuation are dropped.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum token length kept after splitting.
const MIN_TOKEN_LEN: usize = 2;

/// OCR artifacts from level/number labels, dropped case-insensitively.
const STOP_TOKENS: [&str; 2] = ["HP", "Lv"];

/// "No." dex-number marker, matched after the character filter has already
/// removed dots.
fn no_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bNo\.?").expect("static pattern"))
}

fn keep_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{3040}'..='\u{30FF}').contains(&c)
        || ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || c == '-'
        || c == ' '
}

/// True when any code point falls in the hiragana/katakana or common-kanji
/// ranges.
pub fn contains_japanese(s: &str) -> bool {
    s.chars()
        .any(|c| ('\u{3040}'..='\u{30FF}').contains(&c) || ('\u{4E00}'..='\u{9FFF}').contains(&c))
}

/// Fold small kana variants to their base large-kana equivalents so
/// orthographic variants don't inflate edit distance.
pub fn fold_kana(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'ァ' => 'ア',
            'ィ' => 'イ',
            'ゥ' => 'ウ',
            'ェ' => 'エ',
            'ォ' => 'オ',
            'ャ' => 'ヤ',
            'ュ' => 'ユ',
            'ョ' => 'ヨ',
            'ッ' => 'ツ',
            other => other,
        })
        .collect()
}

/// Normalize raw OCR text into an ordered list of candidate name tokens.
///
/// Steps, in order: line breaks become spaces; the strict character filter
/// drops everything else; "No." markers are stripped; whitespace runs
/// collapse into token boundaries; tokens shorter than two characters and
/// the HP/Lv artifacts are discarded.
pub fn tokenize(raw: &str) -> Vec<String> {
    let unbroken = raw.replace(['\n', '\r'], " ");
    let filtered: String = unbroken.chars().filter(|&c| keep_char(c)).collect();
    let stripped = no_marker().replace_all(&filtered, "");

    stripped
        .split_whitespace()
        .filter(|word| {
            word.chars().count() >= MIN_TOKEN_LEN
                && !STOP_TOKENS.iter().any(|stop| word.eq_ignore_ascii_case(stop))
        })
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_strips_noise() {
        let tokens = tokenize("No.025\nPikachu Lv.23\nHP 52/60");
        assert_eq!(tokens, vec!["Pikachu"]);
    }

    #[test]
    fn test_tokenize_keeps_japanese_and_hyphens() {
        let tokens = tokenize("ピカチュウ Ho-Oh");
        assert_eq!(tokens, vec!["ピカチュウ", "Ho-Oh"]);
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let tokens = tokenize("a an Mew");
        assert_eq!(tokens, vec!["an", "Mew"]);
    }

    #[test]
    fn test_tokenize_order_preserving() {
        let tokens = tokenize("Charizard vs Blastoise");
        assert_eq!(tokens, vec!["Charizard", "vs", "Blastoise"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("12 34 %%").is_empty());
    }

    #[test]
    fn test_fold_kana_small_to_large() {
        assert_eq!(fold_kana("ピカチュウ"), fold_kana("ピカチユウ"));
        assert_eq!(fold_kana("ラッタ"), "ラツタ");
    }

    #[test]
    fn test_contains_japanese() {
        assert!(contains_japanese("ピカチュウ"));
        assert!(contains_japanese("雷"));
        assert!(!contains_japanese("Pikachu"));
    }
}
