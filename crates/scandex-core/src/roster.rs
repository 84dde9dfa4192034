//! Roster loading: delimited-text parsing and base/overlay merging.
//!
//! Sources are comma-delimited text with one header line. Parsing is
//! fail-soft throughout: malformed lines are skipped, never fatal. Repeated
//! loads of the same text produce identical record lists.

use ahash::AHashMap;

use crate::types::{CreatureRecord, TypeKind};

/// Placeholder name for an overlay row whose base record is missing.
const UNKNOWN_NAME: &str = "Unknown";

/// Split one CSV line honoring quoted fields.
///
/// A `"` toggles in-quote state; a comma splits only outside quotes. No
/// escaped-quote-within-quotes support. Apostrophes inside quoted fields
/// (e.g. `"Farfetch'd"`) pass through untouched.
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Unwrap a bracketed, quoted pseudo-array type list.
///
/// `"['Grass', 'Poison']"` becomes `["Grass", "Poison"]`.
fn unwrap_type_list(raw: &str) -> Vec<String> {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
        .collect::<String>()
        .split(',')
        .map(|part| part.trim().to_string())
        .collect()
}

/// Parse the type slots starting at `idx`.
///
/// Either a single bracketed list field holding both types, or two
/// positional fields (the second may be blank). Returns the parsed pair and
/// the index of the first field after the type slots.
fn parse_type_slots(fields: &[String], idx: usize) -> Option<(TypeKind, TypeKind, usize)> {
    let raw = fields.get(idx)?;

    if raw.contains('[') {
        let parts = unwrap_type_list(raw);
        let primary = parts
            .first()
            .filter(|p| !p.is_empty())
            .map(|p| TypeKind::from_name(p))
            .unwrap_or(TypeKind::Normal);
        let secondary = parts
            .get(1)
            .filter(|p| !p.is_empty())
            .map(|p| TypeKind::from_name(p))
            .unwrap_or(TypeKind::Unknown);
        return Some((primary, secondary, idx + 1));
    }

    let primary = TypeKind::from_name(raw);
    let secondary = fields
        .get(idx + 1)
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(TypeKind::from_name)
        .unwrap_or(TypeKind::Unknown);
    Some((primary, secondary, idx + 2))
}

/// Lines that carry data: header skipped, first field must parse as an id.
fn data_lines(text: &str) -> impl Iterator<Item = (u32, Vec<String>)> + '_ {
    text.lines().skip(1).filter_map(|line| {
        let fields = split_quoted(line);
        let id: u32 = fields.first()?.trim().parse().ok()?;
        Some((id, fields))
    })
}

/// Parse a base roster source.
///
/// Columns: `numeric_id, canonical_name, primary_type, secondary_type?,
/// alt_script_name?`. The type slots may instead be one bracketed list
/// field. Non-data lines (header, footers, malformed rows) are skipped.
pub fn parse_roster(text: &str) -> Vec<CreatureRecord> {
    data_lines(text)
        .filter_map(|(id, fields)| {
            let name = fields.get(1)?.trim();
            if name.is_empty() {
                return None;
            }
            let (primary, secondary, next) = parse_type_slots(&fields, 2)?;
            let kana = fields
                .get(next)
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
                .map(String::from);
            Some(CreatureRecord {
                numeric_id: id,
                canonical_name: name.to_string(),
                primary_type: primary,
                secondary_type: secondary,
                variant_label: None,
                alt_script_name: kana,
            })
        })
        .collect()
}

/// Parse a regional/alternate-form overlay source.
///
/// Columns: `numeric_id, variant_label, primary_type, secondary_type?`.
/// Names are inherited from the base roster during [`merge`]; until then the
/// canonical name is empty.
pub fn parse_overlay(text: &str) -> Vec<CreatureRecord> {
    data_lines(text)
        .filter_map(|(id, fields)| {
            let label = fields.get(1)?.trim();
            if label.is_empty() {
                return None;
            }
            let (primary, secondary, _) = parse_type_slots(&fields, 2)?;
            Some(CreatureRecord {
                numeric_id: id,
                canonical_name: String::new(),
                primary_type: primary,
                secondary_type: secondary,
                variant_label: Some(label.to_string()),
                alt_script_name: None,
            })
        })
        .collect()
}

/// Merge overlay records against the base roster by `numeric_id`.
///
/// Overlay records inherit `canonical_name` and `alt_script_name` from the
/// matching base record; an overlay with no base record gets the literal
/// "Unknown" placeholder name. The result is sorted by `numeric_id`
/// (stable, base forms before their variants).
pub fn merge(base: Vec<CreatureRecord>, overlay: Vec<CreatureRecord>) -> Vec<CreatureRecord> {
    let by_id: AHashMap<u32, (String, Option<String>)> = base
        .iter()
        .map(|r| {
            (
                r.numeric_id,
                (r.canonical_name.clone(), r.alt_script_name.clone()),
            )
        })
        .collect();

    let mut records = base;
    for mut variant in overlay {
        match by_id.get(&variant.numeric_id) {
            Some((name, kana)) => {
                variant.canonical_name = name.clone();
                variant.alt_script_name = kana.clone();
            }
            None => variant.canonical_name = UNKNOWN_NAME.to_string(),
        }
        records.push(variant);
    }

    records.sort_by_key(|r| r.numeric_id);
    records
}

/// The full record set active for one profile.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<CreatureRecord>,
}

impl Roster {
    /// Load from base text plus an optional overlay.
    pub fn load(base_text: &str, overlay_text: Option<&str>) -> Self {
        let base = parse_roster(base_text);
        let overlay = overlay_text.map(parse_overlay).unwrap_or_default();
        Self {
            records: merge(base, overlay),
        }
    }

    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in the variant group of the record matching `name`
    /// (canonical, case-insensitive, or exact kana). Empty when unmatched.
    pub fn variants_for(&self, name: &str) -> Vec<&CreatureRecord> {
        let target = self.records.iter().find(|r| {
            r.canonical_name.eq_ignore_ascii_case(name)
                || r.alt_script_name.as_deref() == Some(name)
        });
        match target {
            Some(target) => self
                .records
                .iter()
                .filter(|r| r.numeric_id == target.numeric_id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Case-insensitive substring filter over name, kana, and variant label.
    /// A blank query returns everything.
    pub fn filter(&self, query: &str) -> Vec<&CreatureRecord> {
        if query.trim().is_empty() {
            return self.records.iter().collect();
        }
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.canonical_name.to_lowercase().contains(&query)
                    || r.alt_script_name
                        .as_deref()
                        .is_some_and(|kana| kana.contains(query.as_str()))
                    || r.variant_label
                        .as_deref()
                        .is_some_and(|label| label.to_lowercase().contains(&query))
            })
            .collect()
    }
}
