//! The profile registry.
//!
//! Owns the built-in profile set plus durably persisted user profiles.
//! Mutations follow replace-then-persist: state changes in memory, then the
//! whole user-profile document is written out atomically (temp file +
//! rename). Callers serialize access; there is no internal locking.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use scandex_core::RuleEra;

use crate::builtin::builtin_profiles;
use crate::error::{RegistryError, Result};
use crate::profile::{Profile, SourceRef};

const REGISTRY_FILE: &str = "profiles.json";
const SOURCES_DIR: &str = "sources";

/// On-disk registry document: user profiles plus the selected id.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedRegistry {
    profiles: Vec<Profile>,
    selected: Option<String>,
}

/// Built-in and user profiles with a persisted selection.
#[derive(Debug)]
pub struct ProfileRegistry {
    root: PathBuf,
    builtins: Vec<Profile>,
    user: Vec<Profile>,
    selected: String,
}

impl ProfileRegistry {
    /// Open a registry rooted at `root`, restoring any persisted user
    /// profiles and selection. A corrupt registry document is ignored
    /// rather than fatal; an unknown persisted selection falls back to the
    /// first built-in.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;

        let builtins = builtin_profiles();
        let mut registry = Self {
            selected: builtins[0].id.clone(),
            root,
            builtins,
            user: Vec::new(),
        };
        registry.restore();
        Ok(registry)
    }

    fn registry_path(&self) -> PathBuf {
        self.root.join(REGISTRY_FILE)
    }

    fn sources_dir(&self, id: &str) -> PathBuf {
        self.root.join(SOURCES_DIR).join(id)
    }

    fn restore(&mut self) {
        let path = self.registry_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => {
                debug!(path = %path.display(), "no persisted registry, starting fresh");
                return;
            }
        };

        match serde_json::from_slice::<PersistedRegistry>(&bytes) {
            Ok(state) => {
                self.user = state.profiles.into_iter().filter(|p| !p.is_builtin).collect();
                if let Some(id) = state.selected {
                    if self.find(&id).is_some() {
                        self.selected = id;
                    } else {
                        warn!(%id, "persisted selection unknown, falling back to first built-in");
                    }
                }
                debug!(profiles = self.user.len(), selected = %self.selected, "registry restored");
            }
            Err(err) => {
                warn!(%err, "corrupt registry document ignored");
            }
        }
    }

    /// All profiles: built-ins first in declaration order, then user
    /// profiles in creation order.
    pub fn profiles(&self) -> Vec<&Profile> {
        self.builtins.iter().chain(self.user.iter()).collect()
    }

    /// The currently selected profile.
    pub fn active(&self) -> &Profile {
        self.find(&self.selected).unwrap_or(&self.builtins[0])
    }

    fn find(&self, id: &str) -> Option<&Profile> {
        self.builtins
            .iter()
            .chain(self.user.iter())
            .find(|p| p.id == id)
    }

    /// Make `id` the active profile and persist the selection.
    pub fn select(&mut self, id: &str) -> Result<()> {
        if self.find(id).is_none() {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        self.selected = id.to_string();
        debug!(%id, "profile selected");
        self.persist()
    }

    /// Create a user profile from caller-supplied source bytes.
    ///
    /// The bytes are copied into registry-owned storage under
    /// `sources/<id>/`; the profile then refers only to those copies. The
    /// new profile is appended and the registry persisted, but it is not
    /// auto-selected.
    pub fn create_user_profile(
        &mut self,
        name: &str,
        roster_bytes: &[u8],
        overlay_bytes: Option<&[u8]>,
        chart_bytes: Option<&[u8]>,
        rule_era: RuleEra,
    ) -> Result<&Profile> {
        let id = self.fresh_id();
        let dir = self.sources_dir(&id);
        fs::create_dir_all(&dir)?;

        let roster_path = dir.join("roster.csv");
        fs::write(&roster_path, roster_bytes)?;

        let overlay_source = match overlay_bytes {
            Some(bytes) => {
                let path = dir.join("overlay.csv");
                fs::write(&path, bytes)?;
                Some(SourceRef::File(path))
            }
            None => None,
        };
        let custom_chart_source = match chart_bytes {
            Some(bytes) => {
                let path = dir.join("chart.csv");
                fs::write(&path, bytes)?;
                Some(SourceRef::File(path))
            }
            None => None,
        };

        let profile = Profile {
            id,
            display_name: name.to_string(),
            is_builtin: false,
            roster_source: SourceRef::File(roster_path),
            overlay_source,
            custom_chart_source,
            rule_era,
        };
        debug!(id = %profile.id, name, "user profile created");

        self.user.push(profile);
        self.persist()?;
        Ok(self.user.last().expect("non-empty after push"))
    }

    /// Delete a user profile, its copied sources, and persist.
    ///
    /// Deleting the active profile re-selects the first built-in. Built-ins
    /// cannot be deleted.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if self.builtins.iter().any(|p| p.id == id) {
            return Err(RegistryError::BuiltinImmutable(id.to_string()));
        }
        let index = self
            .user
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        let removed = self.user.remove(index);
        if self.selected == removed.id {
            self.selected = self.builtins[0].id.clone();
            debug!(fallback = %self.selected, "active profile deleted, selection reset");
        }
        self.persist()?;

        // best-effort cleanup of the copied source files
        if let Err(err) = fs::remove_dir_all(self.sources_dir(&removed.id)) {
            debug!(id = %removed.id, %err, "source cleanup skipped");
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let state = PersistedRegistry {
            profiles: self.user.clone(),
            selected: Some(self.selected.clone()),
        };
        let bytes = serde_json::to_vec_pretty(&state)?;

        let path = self.registry_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;
        debug!(profiles = state.profiles.len(), "registry persisted");
        Ok(())
    }

    fn fresh_id(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut id = format!("custom_{millis}");
        let mut n = 1;
        while self.find(&id).is_some() {
            id = format!("custom_{millis}_{n}");
            n += 1;
        }
        id
    }
}
