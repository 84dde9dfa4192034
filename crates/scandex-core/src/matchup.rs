//! Weakness/resistance aggregation over the active chart.

use crate::chart::{era, ChartMode};
use crate::types::{CreatureRecord, RuleEra, TypeKind};

/// Compute the weakness and resistance lists for `record`.
///
/// For every attacking type the multipliers against the record's
/// era-remapped primary and secondary types are multiplied (an absent
/// secondary contributes 1.0). Products above 1.0 land in the weakness
/// list (sorted by descending multiplier), below 1.0 in the resistance
/// list (ascending). Exactly-neutral products appear in neither. Ties keep
/// `TypeKind` declaration order (stable sort).
pub fn weaknesses_and_resistances(
    record: &CreatureRecord,
    mode: &ChartMode,
    rule_era: RuleEra,
) -> (Vec<(TypeKind, f64)>, Vec<(TypeKind, f64)>) {
    let (primary, secondary) = era::effective_types(record, rule_era);

    let mut weaknesses = Vec::new();
    let mut resistances = Vec::new();

    for attacker in TypeKind::CHARTABLE {
        let mut multiplier = mode.multiplier(attacker, primary);
        if !secondary.is_unknown() {
            multiplier *= mode.multiplier(attacker, secondary);
        }

        if multiplier > 1.0 {
            weaknesses.push((attacker, multiplier));
        } else if multiplier < 1.0 {
            resistances.push((attacker, multiplier));
        }
    }

    weaknesses.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    resistances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    (weaknesses, resistances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str, primary: TypeKind, secondary: TypeKind) -> CreatureRecord {
        CreatureRecord {
            numeric_id: 1,
            canonical_name: name.to_string(),
            primary_type: primary,
            secondary_type: secondary,
            variant_label: None,
            alt_script_name: None,
        }
    }

    #[test]
    fn test_grass_poison_modern_matchups() {
        let bulbasaur = record("Bulbasaur", TypeKind::Grass, TypeKind::Poison);
        let mode = ChartMode::Layered(RuleEra::Era6Plus);
        let (weak, resist) = weaknesses_and_resistances(&bulbasaur, &mode, RuleEra::Era6Plus);

        assert_eq!(
            weak,
            vec![
                (TypeKind::Fire, 2.0),
                (TypeKind::Ice, 2.0),
                (TypeKind::Flying, 2.0),
                (TypeKind::Psychic, 2.0),
            ]
        );
        assert_eq!(
            resist,
            vec![
                (TypeKind::Grass, 0.25),
                (TypeKind::Water, 0.5),
                (TypeKind::Electric, 0.5),
                (TypeKind::Fighting, 0.5),
                (TypeKind::Fairy, 0.5),
            ]
        );
    }

    #[test]
    fn test_quad_weakness_sorts_first() {
        let dragonite = record("Dragonite", TypeKind::Dragon, TypeKind::Flying);
        let mode = ChartMode::Layered(RuleEra::Era6Plus);
        let (weak, _) = weaknesses_and_resistances(&dragonite, &mode, RuleEra::Era6Plus);
        assert_eq!(weak[0], (TypeKind::Ice, 4.0));
    }

    #[test]
    fn test_single_type_has_unit_secondary_factor() {
        let pikachu = record("Pikachu", TypeKind::Electric, TypeKind::Unknown);
        let mode = ChartMode::Layered(RuleEra::Era6Plus);
        let (weak, resist) = weaknesses_and_resistances(&pikachu, &mode, RuleEra::Era6Plus);
        assert_eq!(weak, vec![(TypeKind::Ground, 2.0)]);
        assert_eq!(
            resist,
            vec![
                (TypeKind::Electric, 0.5),
                (TypeKind::Flying, 0.5),
                (TypeKind::Steel, 0.5),
            ]
        );
    }

    #[test]
    fn test_era_remap_changes_displayed_matchups() {
        let magnemite = record("Magnemite", TypeKind::Electric, TypeKind::Steel);
        let era1 = ChartMode::Layered(RuleEra::Era1);
        let (weak, _) = weaknesses_and_resistances(&magnemite, &era1, RuleEra::Era1);
        // Pure Electric under Era1: only Ground is super-effective.
        assert_eq!(weak, vec![(TypeKind::Ground, 2.0)]);

        let modern = ChartMode::Layered(RuleEra::Era6Plus);
        let (weak, _) = weaknesses_and_resistances(&magnemite, &modern, RuleEra::Era6Plus);
        assert!(weak.contains(&(TypeKind::Ground, 4.0)));
        assert!(weak.contains(&(TypeKind::Fire, 2.0)));
        assert!(weak.contains(&(TypeKind::Fighting, 2.0)));
    }
}
