//! Building engine state from the active profile.

use tracing::debug;

use scandex_core::EngineState;

use crate::registry::ProfileRegistry;
use crate::sources::read_source;

impl ProfileRegistry {
    /// Read the active profile's sources and build a fresh [`EngineState`].
    ///
    /// Missing or unreadable sources degrade: the engine is still built,
    /// with an empty roster or the plain layered chart as appropriate.
    pub fn load_engine(&self) -> EngineState {
        let profile = self.active();

        let base = read_source(&profile.roster_source).unwrap_or_default();
        let overlay = profile.overlay_source.as_ref().and_then(read_source);
        let chart = profile.custom_chart_source.as_ref().and_then(read_source);

        debug!(
            profile = %profile.id,
            custom_chart = chart.is_some(),
            "building engine state"
        );
        EngineState::load(&base, overlay.as_deref(), chart.as_deref(), profile.rule_era)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use scandex_core::{RuleEra, TypeKind};

    #[test]
    fn test_builtin_engine_scans() {
        let dir = TempDir::new().unwrap();
        let registry = ProfileRegistry::open(dir.path()).unwrap();

        let engine = registry.load_engine();
        let hits = engine.scan("No.025 Pikachu Lv.12");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.canonical_name, "Pikachu");
        assert_eq!(hits[0].weaknesses, vec![(TypeKind::Ground, 2.0)]);
    }

    #[test]
    fn test_retro_profile_drops_overlay_forms() {
        let dir = TempDir::new().unwrap();
        let mut registry = ProfileRegistry::open(dir.path()).unwrap();

        let modern = registry.load_engine();
        assert_eq!(modern.roster().variants_for("Raichu").len(), 2);

        registry.select("vanilla_retro").unwrap();
        let retro = registry.load_engine();
        assert_eq!(retro.roster().variants_for("Raichu").len(), 1);
        assert_eq!(retro.rule_era(), RuleEra::Era1);
    }

    #[test]
    fn test_user_profile_with_custom_chart() {
        let dir = TempDir::new().unwrap();
        let mut registry = ProfileRegistry::open(dir.path()).unwrap();

        let roster = "id,name,type1\n25,Pikachu,Electric\n";
        let chart = ",Electric\nGround,1/2\n";
        let id = registry
            .create_user_profile(
                "Inverted",
                roster.as_bytes(),
                None,
                Some(chart.as_bytes()),
                RuleEra::Era6Plus,
            )
            .unwrap()
            .id
            .clone();
        registry.select(&id).unwrap();

        let engine = registry.load_engine();
        assert_eq!(
            engine.multiplier(TypeKind::Ground, TypeKind::Electric),
            0.5
        );
    }

    #[test]
    fn test_delete_active_reloads_builtin_roster() {
        let dir = TempDir::new().unwrap();
        let mut registry = ProfileRegistry::open(dir.path()).unwrap();

        let roster = "id,name,type1\n999,Missingno,Normal\n";
        let id = registry
            .create_user_profile("Tiny", roster.as_bytes(), None, None, RuleEra::Era6Plus)
            .unwrap()
            .id
            .clone();
        registry.select(&id).unwrap();
        assert_eq!(registry.load_engine().roster().len(), 1);

        registry.delete(&id).unwrap();
        let engine = registry.load_engine();
        assert!(engine.roster().len() > 1);
        assert_eq!(engine.scan("Pikachu")[0].record.canonical_name, "Pikachu");
    }

    #[test]
    fn test_deleted_source_degrades_to_empty_roster() {
        let dir = TempDir::new().unwrap();
        let mut registry = ProfileRegistry::open(dir.path()).unwrap();

        let roster = "id,name,type1\n25,Pikachu,Electric\n";
        let id = registry
            .create_user_profile("Gone", roster.as_bytes(), None, None, RuleEra::Era6Plus)
            .unwrap()
            .id
            .clone();
        registry.select(&id).unwrap();
        std::fs::remove_dir_all(dir.path().join("sources").join(&id)).unwrap();

        let engine = registry.load_engine();
        assert!(engine.roster().is_empty());
        assert!(engine.scan("Pikachu").is_empty());
    }
}
