//! Era-specific rule overrides.
//!
//! State-free functions layered over a base table lookup, plus the
//! pre-lookup type remap for species whose stored typing postdates the
//! active era.

use crate::types::{CreatureRecord, RuleEra, TypeKind};

/// Types that do not exist under `Era1`.
fn missing_in_era1(kind: TypeKind) -> bool {
    matches!(kind, TypeKind::Dark | TypeKind::Steel | TypeKind::Fairy)
}

/// Apply era overrides to a base table lookup result.
pub fn apply(attacker: TypeKind, defender: TypeKind, base: f64, era: RuleEra) -> f64 {
    match era {
        RuleEra::Era1 => {
            if missing_in_era1(attacker) || missing_in_era1(defender) {
                return 1.0;
            }
            match (attacker, defender) {
                (TypeKind::Ghost, TypeKind::Psychic) => 0.0,
                (TypeKind::Poison, TypeKind::Bug) => 2.0,
                (TypeKind::Bug, TypeKind::Poison) => 2.0,
                (TypeKind::Ice, TypeKind::Fire) => 1.0,
                _ => base,
            }
        }
        RuleEra::Era2to5 => {
            if defender == TypeKind::Steel
                && matches!(attacker, TypeKind::Ghost | TypeKind::Dark)
            {
                return 0.5;
            }
            base
        }
        RuleEra::Era6Plus => base,
    }
}

/// Remap a record's stored types to their historical typing for `era`.
///
/// Applied before both chart lookup and weakness/resistance aggregation, so
/// the same species shows different effective types per era.
pub fn effective_types(record: &CreatureRecord, era: RuleEra) -> (TypeKind, TypeKind) {
    let mut primary = record.primary_type;
    let mut secondary = record.secondary_type;

    // Magnemite and Magneton were pure Electric under the first ruleset.
    // Species-specific hardcode, not a general rule.
    if era == RuleEra::Era1
        && (record.canonical_name.eq_ignore_ascii_case("magnemite")
            || record.canonical_name.eq_ignore_ascii_case("magneton"))
    {
        secondary = TypeKind::Unknown;
    }

    if era != RuleEra::Era6Plus {
        if primary == TypeKind::Fairy {
            primary = TypeKind::Normal;
        }
        if secondary == TypeKind::Fairy {
            secondary = TypeKind::Unknown;
        }
    }

    (primary, secondary)
}
