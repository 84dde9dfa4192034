//! Caller-owned engine state and the scan pipeline.
//!
//! `EngineState` bundles everything loaded for one profile: the merged
//! roster, the chart resolution mode, and the rule era. The caller rebuilds
//! it explicitly on profile change; nothing in here caches across profiles.

use serde::{Deserialize, Serialize};

use crate::chart::{parse_custom, ChartMode};
use crate::matcher::best_match;
use crate::matchup::weaknesses_and_resistances;
use crate::normalize::tokenize;
use crate::roster::Roster;
use crate::types::{CreatureRecord, RuleEra, TypeKind};

/// At most this many distinct creatures are resolved per scan.
const MAX_SCAN_MATCHES: usize = 2;

/// One resolved creature with its matchup lists, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanMatch {
    pub record: CreatureRecord,
    pub weaknesses: Vec<(TypeKind, f64)>,
    pub resistances: Vec<(TypeKind, f64)>,
}

/// Everything loaded for the active profile.
#[derive(Debug, Clone)]
pub struct EngineState {
    roster: Roster,
    mode: ChartMode,
    rule_era: RuleEra,
}

impl EngineState {
    /// Build engine state from already-read source texts.
    ///
    /// A custom chart text, when present, is authoritative and suppresses
    /// era layering entirely. Missing sources are passed as `None`/empty
    /// and degrade to an empty roster or the plain layered base chart.
    pub fn load(
        base_text: &str,
        overlay_text: Option<&str>,
        chart_text: Option<&str>,
        rule_era: RuleEra,
    ) -> Self {
        let mode = match chart_text {
            Some(text) => ChartMode::Authoritative(parse_custom(text)),
            None => ChartMode::Layered(rule_era),
        };
        Self {
            roster: Roster::load(base_text, overlay_text),
            mode,
            rule_era,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn rule_era(&self) -> RuleEra {
        self.rule_era
    }

    pub fn chart_mode(&self) -> &ChartMode {
        &self.mode
    }

    /// Effective multiplier under the active chart mode.
    pub fn multiplier(&self, attacker: TypeKind, defender: TypeKind) -> f64 {
        self.mode.multiplier(attacker, defender)
    }

    /// Weakness/resistance lists for one record under the active profile.
    pub fn matchups(
        &self,
        record: &CreatureRecord,
    ) -> (Vec<(TypeKind, f64)>, Vec<(TypeKind, f64)>) {
        weaknesses_and_resistances(record, &self.mode, self.rule_era)
    }

    /// Run the full pipeline over one raw OCR dump.
    ///
    /// Tokens are resolved in order through the fuzzy matcher; duplicate
    /// creature names are collapsed and resolution stops after
    /// [`MAX_SCAN_MATCHES`] distinct hits. An empty result is a normal
    /// outcome.
    pub fn scan(&self, raw_ocr_text: &str) -> Vec<ScanMatch> {
        let mut matches: Vec<ScanMatch> = Vec::new();

        for token in tokenize(raw_ocr_text) {
            if matches.len() >= MAX_SCAN_MATCHES {
                break;
            }
            let Some(record) = best_match(&token, self.roster.records()) else {
                continue;
            };
            if matches
                .iter()
                .any(|m| m.record.canonical_name == record.canonical_name)
            {
                continue;
            }
            let (weaknesses, resistances) = self.matchups(record);
            matches.push(ScanMatch {
                record: record.clone(),
                weaknesses,
                resistances,
            });
        }

        matches
    }
}
