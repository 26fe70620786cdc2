//! Read-only Pokemon knowledge base.
//!
//! `rotom-dex` loads a JSON knowledge base into a [`Registry`] of entities
//! (species with stats, abilities, evolution lines and alternate forms) plus
//! a small strategic catalogue of abilities, priority moves and speed
//! control options. Type math lives in `rotom-chart`; this crate only uses
//! its [`Type`](rotom_chart::Type) vocabulary.
//!
//! ```
//! use rotom_dex::{KnowledgeBase, Region};
//!
//! let kb = KnowledgeBase::bundled().unwrap();
//! let mime = kb.registry.find("mr-mime").unwrap();
//! assert_eq!(mime.name, "Mr. Mime");
//!
//! let galarian = kb.registry.regional_form("Mr. Mime", Region::Galar).unwrap();
//! assert!(galarian.type_changed());
//! ```

pub mod ability;
pub mod entity;
mod error;
pub mod form;
mod generation;
mod loader;
pub mod moves;
mod normalize;
mod registry;
pub mod stats;

pub use ability::{AbilityCategory, AbilityCombo, AbilityInfo, AbilitySet, TeamSynergy};
pub use entity::{Entity, EvolutionLink};
pub use error::LoadError;
pub use form::{AlternateForm, FormKind, FormView, Region, StatOverride};
pub use generation::GenerationInfo;
pub use loader::KnowledgeBase;
pub use moves::{MoveCategory, PriorityMove, SpeedControl};
pub use normalize::normalize_name;
pub use registry::{Catalogue, Registry};
pub use stats::{Stat, StatBlock, StatDeltas};
