//! Fuzzy roster matching.
//!
//! Resolves one normalized OCR token to the single best roster record, or
//! nothing. No-match is a normal outcome, never an error.

use strsim::levenshtein;

use crate::normalize::{contains_japanese, fold_kana};
use crate::types::CreatureRecord;

/// Maximum accepted edit distance. Flat, not length-scaled.
const MAX_EDIT_DISTANCE: usize = 1;

/// Records whose name lengths differ from the token by more than this (on
/// both scripts) are skipped outright. Bounds the scan and keeps short
/// tokens from matching pathologically.
const MAX_LENGTH_DIFF: usize = 2;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Find the single best match for `token` in `records`.
///
/// Exact matches (case-insensitive canonical name, exact kana) win
/// immediately. Otherwise every record is scored with the minimum of a
/// Latin-script edit distance (skipped for Japanese tokens) and a
/// kana-folded edit distance (skipped when the record has no kana name);
/// the lowest distance within [`MAX_EDIT_DISTANCE`] wins. Ties resolve to
/// the record encountered first in roster order.
pub fn best_match<'a>(token: &str, records: &'a [CreatureRecord]) -> Option<&'a CreatureRecord> {
    if let Some(exact) = records.iter().find(|r| {
        r.canonical_name.eq_ignore_ascii_case(token)
            || r.alt_script_name.as_deref() == Some(token)
    }) {
        return Some(exact);
    }

    if token.is_empty() {
        return None;
    }

    let japanese = contains_japanese(token);
    let token_lower = token.to_lowercase();
    let token_folded = fold_kana(token);
    let token_len = char_len(token);

    let mut best: Option<&CreatureRecord> = None;
    let mut best_dist = usize::MAX;

    for record in records {
        let name_diff = token_len.abs_diff(char_len(&record.canonical_name));
        let kana_diff = record
            .alt_script_name
            .as_deref()
            .map(|kana| token_len.abs_diff(char_len(kana)))
            .unwrap_or(usize::MAX);
        if name_diff.min(kana_diff) > MAX_LENGTH_DIFF {
            continue;
        }

        let latin_dist = if japanese {
            usize::MAX
        } else {
            levenshtein(&token_lower, &record.canonical_name.to_lowercase())
        };
        let kana_dist = record
            .alt_script_name
            .as_deref()
            .map(|kana| levenshtein(&token_folded, &fold_kana(kana)))
            .unwrap_or(usize::MAX);

        let dist = latin_dist.min(kana_dist);
        if dist <= MAX_EDIT_DISTANCE && dist < best_dist {
            best_dist = dist;
            best = Some(record);
        }
    }

    best
}
