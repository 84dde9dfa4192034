//! Scandex Core Engine
//!
//! Pure computational kernel for the scandex screen-scanning assistant:
//! roster parsing, OCR text normalization, script-aware fuzzy name
//! matching, and type-effectiveness computation with era rule overrides.
//! No I/O happens here — every loader takes already-read text, and the
//! caller owns and rebuilds [`EngineState`] on profile change.
//!
//! # Example
//!
//! ```rust
//! use scandex_core::{EngineState, RuleEra, TypeKind};
//!
//! let roster = "id,name,type1,type2,kana\n25,Pikachu,Electric,,ピカチュウ\n";
//! let engine = EngineState::load(roster, None, None, RuleEra::Era6Plus);
//!
//! let hits = engine.scan("No.025 Pikuchu Lv.23");
//! assert_eq!(hits[0].record.canonical_name, "Pikachu");
//! assert_eq!(hits[0].weaknesses, vec![(TypeKind::Ground, 2.0)]);
//! ```

pub mod chart;
pub mod engine;
pub mod matcher;
pub mod matchup;
pub mod normalize;
pub mod roster;
pub mod types;

// Re-export main types at crate root
pub use chart::{base_multiplier, parse_custom, ChartMode, CustomChart};
pub use engine::{EngineState, ScanMatch};
pub use matcher::best_match;
pub use matchup::weaknesses_and_resistances;
pub use normalize::{contains_japanese, fold_kana, tokenize};
pub use roster::Roster;
pub use types::{CreatureRecord, RuleEra, TypeKind};
