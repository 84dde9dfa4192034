//! Core type definitions: elemental types, rule eras, creature records.

use serde::{Deserialize, Serialize};

/// Elemental type of a creature or attack.
///
/// Declaration order is load-bearing: it is the tie-break order for
/// weakness/resistance lists and the row/column order of the base chart.
/// `Unknown` is the sentinel for an absent slot and never participates in
/// chart lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Steel,
    Dark,
    Fairy,
    Unknown,
}

impl TypeKind {
    /// Number of chartable kinds (`Unknown` excluded).
    pub const COUNT: usize = 18;

    /// All chartable kinds in declaration order.
    pub const CHARTABLE: [TypeKind; Self::COUNT] = [
        TypeKind::Normal,
        TypeKind::Fire,
        TypeKind::Water,
        TypeKind::Electric,
        TypeKind::Grass,
        TypeKind::Ice,
        TypeKind::Fighting,
        TypeKind::Poison,
        TypeKind::Ground,
        TypeKind::Flying,
        TypeKind::Psychic,
        TypeKind::Bug,
        TypeKind::Rock,
        TypeKind::Ghost,
        TypeKind::Dragon,
        TypeKind::Steel,
        TypeKind::Dark,
        TypeKind::Fairy,
    ];

    /// Ordinal into the base chart, `None` for `Unknown`.
    pub fn ordinal(self) -> Option<usize> {
        let idx = self as usize;
        (idx < Self::COUNT).then_some(idx)
    }

    /// Human-readable name as shown by the consuming UI.
    pub fn display_name(self) -> &'static str {
        match self {
            TypeKind::Normal => "Normal",
            TypeKind::Fire => "Fire",
            TypeKind::Water => "Water",
            TypeKind::Electric => "Electric",
            TypeKind::Grass => "Grass",
            TypeKind::Ice => "Ice",
            TypeKind::Fighting => "Fighting",
            TypeKind::Poison => "Poison",
            TypeKind::Ground => "Ground",
            TypeKind::Flying => "Flying",
            TypeKind::Psychic => "Psychic",
            TypeKind::Bug => "Bug",
            TypeKind::Rock => "Rock",
            TypeKind::Ghost => "Ghost",
            TypeKind::Dragon => "Dragon",
            TypeKind::Steel => "Steel",
            TypeKind::Dark => "Dark",
            TypeKind::Fairy => "Fairy",
            TypeKind::Unknown => "???",
        }
    }

    /// UI accent color for this kind.
    pub fn color_hex(self) -> &'static str {
        match self {
            TypeKind::Normal => "#A8A77A",
            TypeKind::Fire => "#EE8130",
            TypeKind::Water => "#6390F0",
            TypeKind::Electric => "#F7D02C",
            TypeKind::Grass => "#7AC74C",
            TypeKind::Ice => "#96D9D6",
            TypeKind::Fighting => "#C22E28",
            TypeKind::Poison => "#A33EA1",
            TypeKind::Ground => "#E2BF65",
            TypeKind::Flying => "#A98FF3",
            TypeKind::Psychic => "#F95587",
            TypeKind::Bug => "#A6B91A",
            TypeKind::Rock => "#B6A136",
            TypeKind::Ghost => "#735797",
            TypeKind::Dragon => "#6F35FC",
            TypeKind::Steel => "#B7B7CE",
            TypeKind::Dark => "#705746",
            TypeKind::Fairy => "#D685AD",
            TypeKind::Unknown => "#D3D3D3",
        }
    }

    /// Fail-soft case-insensitive lookup; anything unrecognized is `Unknown`.
    pub fn from_name(value: &str) -> TypeKind {
        let value = value.trim();
        for kind in Self::CHARTABLE {
            if kind.display_name().eq_ignore_ascii_case(value) {
                return kind;
            }
        }
        TypeKind::Unknown
    }

    /// True when this slot is absent.
    pub fn is_unknown(self) -> bool {
        self == TypeKind::Unknown
    }
}

/// Historical ruleset controlling chart overrides and which types exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleEra {
    /// No Dark/Steel/Fairy; Ghost cannot touch Psychic.
    Era1,
    /// Steel still resists Ghost and Dark; no Fairy.
    Era2to5,
    /// Modern chart, unmodified.
    Era6Plus,
}

impl RuleEra {
    pub fn label(self) -> &'static str {
        match self {
            RuleEra::Era1 => "Retro (Gen 1)",
            RuleEra::Era2to5 => "Classic (Gen 2-5)",
            RuleEra::Era6Plus => "Modern (Gen 6+)",
        }
    }
}

/// One roster entry: a base form or a regional/alternate variant.
///
/// All forms of one species share `numeric_id`; exactly one record per id
/// group carries `variant_label: None` (the base form). Records are built
/// once per profile load and never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    /// Positive species number, shared across variant groups.
    pub numeric_id: u32,

    /// Display name (ASCII or transliterated).
    pub canonical_name: String,

    pub primary_type: TypeKind,

    /// `TypeKind::Unknown` when the slot is absent.
    pub secondary_type: TypeKind,

    /// Distinguishes a regional/alternate form from the base form.
    pub variant_label: Option<String>,

    /// Katakana rendering used for alternate-script matching.
    pub alt_script_name: Option<String>,
}

impl CreatureRecord {
    /// True for the one base form of a variant group.
    pub fn is_base_form(&self) -> bool {
        self.variant_label.is_none()
    }

    /// Name with the variant label appended, e.g. "Vulpix (Alolan)".
    pub fn display_name(&self) -> String {
        match &self.variant_label {
            Some(label) => format!("{} ({})", self.canonical_name, label),
            None => self.canonical_name.clone(),
        }
    }
}
