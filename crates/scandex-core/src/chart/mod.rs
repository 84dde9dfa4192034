//! Type-effectiveness chart: base table, custom charts, era overrides.
//!
//! Multiplier resolution is a two-variant strategy: a profile-supplied
//! custom chart is authoritative as-is, otherwise the base table is layered
//! with the active era's overrides.

pub mod base;
pub mod custom;
pub mod era;

pub use base::base_multiplier;
pub use custom::{parse_custom, CustomChart};

use crate::types::{RuleEra, TypeKind};

/// How effective multipliers are resolved for the active profile.
#[derive(Debug, Clone)]
pub enum ChartMode {
    /// A custom chart replaces the base table entirely; no era layering.
    Authoritative(CustomChart),
    /// Base table lookup with era overrides applied after.
    Layered(RuleEra),
}

impl ChartMode {
    /// The effective multiplier for `attacker` hitting `defender`.
    pub fn multiplier(&self, attacker: TypeKind, defender: TypeKind) -> f64 {
        match self {
            ChartMode::Authoritative(chart) => chart.multiplier(attacker, defender),
            ChartMode::Layered(rule_era) => era::apply(
                attacker,
                defender,
                base_multiplier(attacker, defender),
                *rule_era,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layered_applies_era_overrides() {
        let mode = ChartMode::Layered(RuleEra::Era1);
        assert_eq!(mode.multiplier(TypeKind::Ghost, TypeKind::Psychic), 0.0);
        assert_eq!(mode.multiplier(TypeKind::Dark, TypeKind::Psychic), 1.0);

        let mode = ChartMode::Layered(RuleEra::Era2to5);
        assert_eq!(mode.multiplier(TypeKind::Ghost, TypeKind::Steel), 0.5);

        let mode = ChartMode::Layered(RuleEra::Era6Plus);
        assert_eq!(mode.multiplier(TypeKind::Fire, TypeKind::Grass), 2.0);
        assert_eq!(mode.multiplier(TypeKind::Ghost, TypeKind::Normal), 0.0);
    }

    #[test]
    fn test_authoritative_ignores_era_rules() {
        // Ghost vs Psychic would be forced to 0.0 under Era1 layering, but a
        // custom chart wins outright.
        let chart = parse_custom(",Psychic\nGhost,3\n");
        let mode = ChartMode::Authoritative(chart);
        assert_eq!(mode.multiplier(TypeKind::Ghost, TypeKind::Psychic), 3.0);
        // pairs the custom chart does not mention are neutral
        assert_eq!(mode.multiplier(TypeKind::Fire, TypeKind::Grass), 1.0);
    }
}
