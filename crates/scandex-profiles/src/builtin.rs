//! Built-in profiles and their embedded data sources.

use scandex_core::RuleEra;

use crate::profile::{Profile, SourceRef};

const VANILLA_ROSTER: &str = include_str!("../assets/vanilla_roster.csv");
const VANILLA_OVERLAY: &str = include_str!("../assets/vanilla_overlay.csv");

/// Resolve a packaged asset name to its embedded text.
pub(crate) fn packaged_text(name: &str) -> Option<&'static str> {
    match name {
        "vanilla_roster" => Some(VANILLA_ROSTER),
        "vanilla_overlay" => Some(VANILLA_OVERLAY),
        _ => None,
    }
}

fn packaged(name: &str) -> SourceRef {
    SourceRef::Packaged(name.to_string())
}

/// The fixed built-in profile set, in declaration order.
///
/// The retro profile carries no overlay: regional forms postdate its era.
pub(crate) fn builtin_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "vanilla_modern".to_string(),
            display_name: "Modern (Gen 6+)".to_string(),
            is_builtin: true,
            roster_source: packaged("vanilla_roster"),
            overlay_source: Some(packaged("vanilla_overlay")),
            custom_chart_source: None,
            rule_era: RuleEra::Era6Plus,
        },
        Profile {
            id: "vanilla_classic".to_string(),
            display_name: "Classic (Gen 2-5)".to_string(),
            is_builtin: true,
            roster_source: packaged("vanilla_roster"),
            overlay_source: Some(packaged("vanilla_overlay")),
            custom_chart_source: None,
            rule_era: RuleEra::Era2to5,
        },
        Profile {
            id: "vanilla_retro".to_string(),
            display_name: "Retro (Gen 1)".to_string(),
            is_builtin: true,
            roster_source: packaged("vanilla_roster"),
            overlay_source: None,
            custom_chart_source: None,
            rule_era: RuleEra::Era1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        let profiles = builtin_profiles();
        for (i, a) in profiles.iter().enumerate() {
            for b in &profiles[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_packaged_assets_parse() {
        let roster = scandex_core::Roster::load(
            packaged_text("vanilla_roster").unwrap(),
            packaged_text("vanilla_overlay"),
        );
        assert!(!roster.is_empty());
        // every overlay row found its base record
        assert!(roster
            .records()
            .iter()
            .all(|r| r.canonical_name != "Unknown"));
        // exactly one base form per variant group
        for record in roster.records() {
            let base_forms = roster
                .records()
                .iter()
                .filter(|r| r.numeric_id == record.numeric_id && r.is_base_form())
                .count();
            assert_eq!(base_forms, 1, "id {}", record.numeric_id);
        }
    }
}
