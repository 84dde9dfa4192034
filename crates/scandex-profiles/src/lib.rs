//! Scandex Profile Registry
//!
//! Durable profile management on top of [`scandex_core`]: a fixed set of
//! built-in profiles, user profiles persisted as JSON under a caller-chosen
//! root directory, and a loader that turns the active profile's data
//! sources into a fresh [`scandex_core::EngineState`].
//!
//! # Example
//!
//! ```rust
//! use scandex_profiles::ProfileRegistry;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let registry = ProfileRegistry::open(dir.path()).unwrap();
//!
//! let engine = registry.load_engine();
//! let hits = engine.scan("No.025 Pikachu Lv.23");
//! assert_eq!(hits[0].record.canonical_name, "Pikachu");
//! ```

pub mod error;
pub mod loader;
pub mod profile;
pub mod registry;
pub mod sources;

mod builtin;

pub use error::{RegistryError, Result};
pub use profile::{Profile, SourceRef};
pub use registry::ProfileRegistry;
pub use sources::read_source;
