//! Reasoning over a Pokemon knowledge base.
//!
//! Builds on `rotom-chart` (type math) and `rotom-dex` (the roster) to answer
//! higher-level questions: how two entities compare, which role a stat
//! spread suggests, what a full battle strategy looks like. Every question
//! is a [`Query`] and the [`Engine`] turns it into an [`Answer`].
//!
//! ```
//! use rotom_analysis::{Answer, Engine, Query};
//! use rotom_dex::KnowledgeBase;
//!
//! let kb = KnowledgeBase::bundled().unwrap();
//! let engine = Engine::new(&kb);
//!
//! let answer = engine.answer(&Query::type_matchup("ice", "dragon/flying").unwrap());
//! assert!(matches!(answer, Answer::TypeMatchup(ref m) if m.multiplier == 4.0));
//!
//! let missing = engine.answer(&Query::entity("Agumon"));
//! assert!(!missing.is_found());
//! ```

pub mod compare;
mod config;
mod engine;
pub mod format;
pub mod query;
pub mod role;
pub mod strategy;

pub use compare::{compare, Comparison, StatRow, TypeAdvantage, Unresolved, Winner};
pub use config::RoleThresholds;
pub use engine::Engine;
pub use query::{Answer, NotFound, Query, Subject};
pub use role::{infer_role, OffensiveBias, Role, SpeedTier, StatProfile};
pub use strategy::{strategy_summary, AbilityNote, StrategySummary};
