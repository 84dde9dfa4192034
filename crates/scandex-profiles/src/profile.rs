//! Profile definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use scandex_core::RuleEra;

/// Where a data source's text lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceRef {
    /// An asset compiled into this crate, addressed by name.
    Packaged(String),
    /// A profile-owned copy of a user-supplied file.
    File(PathBuf),
}

/// A named bundle of data sources and a selected rule era.
///
/// Built-in profiles are fixed at process start; user profiles are created
/// and deleted at runtime and persisted across restarts. Ids are unique
/// across the concatenation of both sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable identifier, unique across built-in and user profiles.
    pub id: String,

    pub display_name: String,

    pub is_builtin: bool,

    pub roster_source: SourceRef,

    /// Regional/alternate-form overlay, if any.
    pub overlay_source: Option<SourceRef>,

    /// Authoritative custom chart, if any. `None` means the compiled base
    /// table layered with era overrides.
    pub custom_chart_source: Option<SourceRef>,

    pub rule_era: RuleEra,
}

impl Profile {
    pub fn has_overlay(&self) -> bool {
        self.overlay_source.is_some()
    }

    pub fn has_custom_chart(&self) -> bool {
        self.custom_chart_source.is_some()
    }
}
