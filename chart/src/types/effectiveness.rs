//! Classification of combined multipliers

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six multipliers reachable by combining one attacking type against a
/// one- or two-type defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Effectiveness {
    Immune,
    Quarter,
    Half,
    Neutral,
    Double,
    Quadruple,
}

impl Effectiveness {
    /// All categories, weakest first
    pub const ALL: [Effectiveness; 6] = [
        Effectiveness::Immune,
        Effectiveness::Quarter,
        Effectiveness::Half,
        Effectiveness::Neutral,
        Effectiveness::Double,
        Effectiveness::Quadruple,
    ];

    /// Exact-match classification
    ///
    /// Returns `None` for any value outside {0, 0.25, 0.5, 1, 2, 4}. Such a
    /// value cannot come out of a validated [`TypeChart`](crate::TypeChart).
    pub fn describe(multiplier: f32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.multiplier() == multiplier)
    }

    pub fn multiplier(&self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::Quarter => 0.25,
            Effectiveness::Half => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::Double => 2.0,
            Effectiveness::Quadruple => 4.0,
        }
    }

    /// Short machine label
    pub fn label(&self) -> &'static str {
        match self {
            Effectiveness::Immune => "immune",
            Effectiveness::Quarter => "quarter",
            Effectiveness::Half => "half",
            Effectiveness::Neutral => "neutral",
            Effectiveness::Double => "double",
            Effectiveness::Quadruple => "quadruple",
        }
    }

    /// Player-facing description
    pub fn description(&self) -> &'static str {
        match self {
            Effectiveness::Immune => "No effect (immune)",
            Effectiveness::Quarter => "Barely effective (0.25x)",
            Effectiveness::Half => "Not very effective (0.5x)",
            Effectiveness::Neutral => "Normal effectiveness (1x)",
            Effectiveness::Double => "Super effective (2x)",
            Effectiveness::Quadruple => "Extremely effective (4x)",
        }
    }

    pub fn is_super_effective(&self) -> bool {
        matches!(self, Effectiveness::Double | Effectiveness::Quadruple)
    }

    pub fn is_resisted(&self) -> bool {
        matches!(self, Effectiveness::Quarter | Effectiveness::Half)
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
