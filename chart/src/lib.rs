//! Type chart and matchup math for Pokemon typings.
//!
//! This crate owns the type vocabulary and every computation that only needs
//! the effectiveness matrix: combined multipliers, defensive and offensive
//! profiles, and counter rankings.
//!
//! # Overview
//!
//! `rotom-chart` is the leaf of the workspace:
//!
//! ```text
//! rotom-chart (types + effectiveness) ← THIS CRATE
//!        │
//!        ├─> rotom-dex (entity registry, knowledge-base loading)
//!        └─> rotom-analysis (comparisons, roles, strategy summaries)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 Pokemon types in canonical order
//! - [`TypeSet`] - A one- or two-type typing
//! - [`TypeChart`] - 18x18 effectiveness matrix
//! - [`Effectiveness`] - Closed classification of combined multipliers
//! - [`DefensiveProfile`], [`OffensiveProfile`] - Derived per-typing profiles
//!
//! # Example Usage
//!
//! ```
//! use rotom_chart::{Effectiveness, Type, TypeChart, TypeSet};
//!
//! let chart = TypeChart::standard();
//! let dragonite = TypeSet::dual(Type::Dragon, Type::Flying).unwrap();
//!
//! assert_eq!(chart.combined_multiplier(Type::Ice, &dragonite), 4.0);
//! assert_eq!(
//!     chart.describe(Type::Ice, &dragonite),
//!     Some(Effectiveness::Quadruple)
//! );
//!
//! let profile = chart.defensive_profile(&dragonite);
//! assert_eq!(profile.critical_weaknesses[0].ty, Type::Ice);
//! ```

mod chart;
mod error;
pub mod query;
pub mod types;

pub use chart::TypeChart;
pub use error::{ChartError, TypeError};
pub use query::{
    analyze_matchup, DefensiveProfile, MatchupAnalysis, OffensiveProfile, Recommendation,
    TypeMultiplier,
};
pub use types::{Effectiveness, Type, TypeSet};
