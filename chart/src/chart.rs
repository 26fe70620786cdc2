//! Effectiveness matrix and the dual-type combination rule

use crate::error::ChartError;
use crate::types::{Effectiveness, Type, TypeSet};

/// Multipliers a single (attacker, defender) cell may hold
const CELL_VALUES: [f32; 4] = [0.0, 0.5, 1.0, 2.0];

/// 18x18 effectiveness matrix
///
/// Row = attacking type, column = defending type, both in canonical
/// [`Type`] order. Cells hold 0.0 (immune), 0.5, 1.0 or 2.0.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    cells: [[f32; Type::COUNT]; Type::COUNT],
}

// Columns: Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
#[rustfmt::skip]
static STANDARD: TypeChart = TypeChart {
    cells: [
        /* Normal   */ [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
        /* Fire     */ [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
        /* Water    */ [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
        /* Electric */ [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
        /* Grass    */ [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
        /* Ice      */ [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
        /* Fighting */ [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
        /* Poison   */ [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
        /* Ground   */ [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
        /* Flying   */ [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
        /* Psychic  */ [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
        /* Bug      */ [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
        /* Rock     */ [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
        /* Ghost    */ [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
        /* Dragon   */ [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
        /* Dark     */ [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
        /* Steel    */ [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
        /* Fairy    */ [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
    ],
};

impl TypeChart {
    /// The Gen 6+ chart
    pub fn standard() -> &'static TypeChart {
        &STANDARD
    }

    /// A chart where every matchup is neutral
    pub fn neutral() -> Self {
        Self {
            cells: [[1.0; Type::COUNT]; Type::COUNT],
        }
    }

    /// Build a chart from keyed records; cells not mentioned stay neutral
    pub fn from_entries<I>(entries: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (Type, Type, f32)>,
    {
        let mut chart = Self::neutral();
        for (attacker, defender, multiplier) in entries {
            if !CELL_VALUES.contains(&multiplier) {
                return Err(ChartError::InvalidMultiplier {
                    attacker,
                    defender,
                    multiplier,
                });
            }
            chart.cells[attacker.index()][defender.index()] = multiplier;
        }
        Ok(chart)
    }

    /// Every non-neutral cell, in canonical row-major order
    pub fn entries(&self) -> impl Iterator<Item = (Type, Type, f32)> + '_ {
        Type::ALL.into_iter().flat_map(move |attacker| {
            Type::ALL.into_iter().filter_map(move |defender| {
                let multiplier = self.lookup(attacker, defender);
                (multiplier != 1.0).then_some((attacker, defender, multiplier))
            })
        })
    }

    /// Single-type effectiveness
    pub fn lookup(&self, attacker: Type, defender: Type) -> f32 {
        self.cells[attacker.index()][defender.index()]
    }

    /// Effectiveness of one attacking type against a full typing
    ///
    /// Both defending types apply to the hit, so single lookups multiply.
    /// A 0 from either type makes the whole result 0.
    pub fn combined_multiplier(&self, attacker: Type, defenders: &TypeSet) -> f32 {
        defenders
            .iter()
            .map(|defender| self.lookup(attacker, defender))
            .product()
    }

    /// Best multiplier any of the attacking types reaches against a typing
    ///
    /// The attacking types are alternative move choices, so this is a max
    /// over [`combined_multiplier`](Self::combined_multiplier).
    pub fn best_multiplier(&self, attackers: &TypeSet, defenders: &TypeSet) -> f32 {
        attackers
            .iter()
            .map(|attacker| self.combined_multiplier(attacker, defenders))
            .fold(0.0, f32::max)
    }

    /// Classify [`combined_multiplier`](Self::combined_multiplier)
    pub fn describe(&self, attacker: Type, defenders: &TypeSet) -> Option<Effectiveness> {
        Effectiveness::describe(self.combined_multiplier(attacker, defenders))
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard().clone()
    }
}
