//! Derived matchup queries
//!
//! Everything here is recomputed from a [`TypeChart`](crate::TypeChart) on
//! each call; nothing is cached.

mod counters;
mod matchup;
mod profile;

pub use matchup::{analyze_matchup, MatchupAnalysis, Recommendation};
pub use profile::{DefensiveProfile, OffensiveProfile, TypeMultiplier};
