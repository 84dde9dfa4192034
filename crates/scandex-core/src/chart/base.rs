//! The fixed base type-effectiveness table.
//!
//! A const 18x18 array indexed by [`TypeKind`] ordinal (attacker row,
//! defender column), replacing the string-keyed map the data originally
//! shipped as. Unlisted pairs are 1.0.

use crate::types::TypeKind;

const X0: f64 = 0.0;
const H: f64 = 0.5;
const X1: f64 = 1.0;
const X2: f64 = 2.0;

/// Rows: attacker. Columns: defender. Both in `TypeKind` declaration order:
/// Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Ste Dar Fai
#[rustfmt::skip]
const BASE: [[f64; TypeKind::COUNT]; TypeKind::COUNT] = [
    /* Normal   */ [X1, X1, X1, X1, X1, X1, X1, X1, X1, X1, X1, X1,  H, X0, X1,  H, X1, X1],
    /* Fire     */ [X1,  H,  H, X1, X2, X2, X1, X1, X1, X1, X1, X2,  H, X1,  H, X2, X1, X1],
    /* Water    */ [X1, X2,  H, X1,  H, X1, X1, X1, X2, X1, X1, X1, X2, X1,  H, X1, X1, X1],
    /* Electric */ [X1, X1, X2,  H,  H, X1, X1, X1, X0, X2, X1, X1, X1, X1,  H, X1, X1, X1],
    /* Grass    */ [X1,  H, X2, X1,  H, X1, X1,  H, X2,  H, X1,  H, X2, X1,  H,  H, X1, X1],
    /* Ice      */ [X1,  H,  H, X1, X2,  H, X1, X1, X2, X2, X1, X1, X1, X1, X2,  H, X1, X1],
    /* Fighting */ [X2, X1, X1, X1, X1, X2, X1,  H, X1,  H,  H,  H, X2, X0, X1, X2, X2,  H],
    /* Poison   */ [X1, X1, X1, X1, X2, X1, X1,  H,  H, X1, X1, X1,  H,  H, X1, X0, X1, X2],
    /* Ground   */ [X1, X2, X1, X2,  H, X1, X1, X2, X1, X0, X1,  H, X2, X1, X1, X2, X1, X1],
    /* Flying   */ [X1, X1, X1,  H, X2, X1, X2, X1, X1, X1, X1, X2,  H, X1, X1,  H, X1, X1],
    /* Psychic  */ [X1, X1, X1, X1, X1, X1, X2, X2, X1, X1,  H, X1, X1, X1, X1,  H, X0, X1],
    /* Bug      */ [X1,  H, X1, X1, X2, X1,  H,  H, X1,  H, X2, X1, X1,  H, X1,  H, X2,  H],
    /* Rock     */ [X1, X2, X1, X1, X1, X2,  H, X1,  H, X2, X1, X2, X1, X1, X1,  H, X1, X1],
    /* Ghost    */ [X0, X1, X1, X1, X1, X1, X1, X1, X1, X1, X2, X1, X1, X2, X1, X1,  H, X1],
    /* Dragon   */ [X1, X1, X1, X1, X1, X1, X1, X1, X1, X1, X1, X1, X1, X1, X2,  H, X1, X0],
    /* Steel    */ [X1,  H,  H,  H, X1, X2, X1, X1, X1, X1, X1, X1, X2, X1, X1,  H, X1, X2],
    /* Dark     */ [X1, X1, X1, X1, X1, X1,  H, X1, X1, X1, X2, X1, X1, X2, X1, X1,  H,  H],
    /* Fairy    */ [X1,  H, X1, X1, X1, X1, X2,  H, X1, X1, X1, X1, X1, X1, X2,  H, X2, X1],
];

/// Base multiplier for `attacker` hitting `defender`.
///
/// An `Unknown` slot on either side is neutral.
pub fn base_multiplier(attacker: TypeKind, defender: TypeKind) -> f64 {
    match (attacker.ordinal(), defender.ordinal()) {
        (Some(a), Some(d)) => BASE[a][d],
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_table_values() {
        assert_eq!(base_multiplier(TypeKind::Fire, TypeKind::Grass), 2.0);
        assert_eq!(base_multiplier(TypeKind::Ghost, TypeKind::Normal), 0.0);
        assert_eq!(base_multiplier(TypeKind::Electric, TypeKind::Ground), 0.0);
        assert_eq!(base_multiplier(TypeKind::Dragon, TypeKind::Fairy), 0.0);
        assert_eq!(base_multiplier(TypeKind::Water, TypeKind::Fire), 2.0);
        assert_eq!(base_multiplier(TypeKind::Grass, TypeKind::Grass), 0.5);
        assert_eq!(base_multiplier(TypeKind::Normal, TypeKind::Normal), 1.0);
    }

    #[test]
    fn test_not_symmetric() {
        // Symmetry must not be assumed
        assert_eq!(base_multiplier(TypeKind::Psychic, TypeKind::Dark), 0.0);
        assert_eq!(base_multiplier(TypeKind::Dark, TypeKind::Psychic), 2.0);
    }

    #[test]
    fn test_unknown_is_neutral() {
        assert_eq!(base_multiplier(TypeKind::Unknown, TypeKind::Fire), 1.0);
        assert_eq!(base_multiplier(TypeKind::Fire, TypeKind::Unknown), 1.0);
    }

    #[test]
    fn test_only_standard_multipliers() {
        for row in BASE {
            for cell in row {
                assert!(matches!(cell, 0.0 | 0.5 | 1.0 | 2.0));
            }
        }
    }
}
