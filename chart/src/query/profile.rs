//! Defensive and offensive profiles of a typing

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::chart::TypeChart;
use crate::types::{Effectiveness, Type, TypeSet};

/// A type paired with the multiplier it reaches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TypeMultiplier {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Type,
    pub multiplier: f32,
}

impl TypeMultiplier {
    pub fn new(ty: Type, multiplier: f32) -> Self {
        Self { ty, multiplier }
    }

    pub fn effectiveness(&self) -> Option<Effectiveness> {
        Effectiveness::describe(self.multiplier)
    }
}

/// How every attacking type fares against one typing
///
/// The four buckets `weaknesses`, `resistances`, `immunities` and `neutral`
/// partition the 18 types. `critical_weaknesses` is the 4x subset of
/// `weaknesses`, not a fifth bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DefensiveProfile {
    pub types: TypeSet,

    /// Multiplier > 1, highest first
    pub weaknesses: Vec<TypeMultiplier>,

    /// Multiplier >= 4, highest first
    pub critical_weaknesses: Vec<TypeMultiplier>,

    /// 0 < multiplier < 1, lowest first
    pub resistances: Vec<TypeMultiplier>,

    /// Multiplier == 0
    pub immunities: Vec<Type>,

    /// Multiplier == 1
    pub neutral: Vec<Type>,
}

impl DefensiveProfile {
    /// Weaknesses that are not critical (the 2x ones)
    pub fn double_weaknesses(&self) -> impl Iterator<Item = &TypeMultiplier> {
        self.weaknesses.iter().filter(|w| w.multiplier < 4.0)
    }
}

/// How a typing's STAB moves fare against each single-type defender
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OffensiveProfile {
    pub attackers: TypeSet,
    pub super_effective: Vec<Type>,
    pub resisted: Vec<Type>,
    pub no_effect: Vec<Type>,
    pub neutral: Vec<Type>,
}

impl TypeChart {
    /// Partition all attacking types by how they hit `types`
    pub fn defensive_profile(&self, types: &TypeSet) -> DefensiveProfile {
        let mut weaknesses = Vec::new();
        let mut resistances = Vec::new();
        let mut immunities = Vec::new();
        let mut neutral = Vec::new();

        for attacker in Type::ALL {
            let multiplier = self.combined_multiplier(attacker, types);
            if multiplier == 0.0 {
                immunities.push(attacker);
            } else if multiplier > 1.0 {
                weaknesses.push(TypeMultiplier::new(attacker, multiplier));
            } else if multiplier < 1.0 {
                resistances.push(TypeMultiplier::new(attacker, multiplier));
            } else {
                neutral.push(attacker);
            }
        }

        // Stable sorts over canonical iteration order keep the tie-break
        weaknesses.sort_by(|a, b| b.multiplier.total_cmp(&a.multiplier));
        resistances.sort_by(|a, b| a.multiplier.total_cmp(&b.multiplier));

        let critical_weaknesses = weaknesses
            .iter()
            .copied()
            .filter(|w| w.multiplier >= 4.0)
            .collect();

        DefensiveProfile {
            types: *types,
            weaknesses,
            critical_weaknesses,
            resistances,
            immunities,
            neutral,
        }
    }

    /// Partition all single-type defenders by the best hit `attackers` can land
    pub fn offensive_profile(&self, attackers: &TypeSet) -> OffensiveProfile {
        let mut profile = OffensiveProfile {
            attackers: *attackers,
            super_effective: Vec::new(),
            resisted: Vec::new(),
            no_effect: Vec::new(),
            neutral: Vec::new(),
        };

        for defender in Type::ALL {
            let best = attackers
                .iter()
                .map(|attacker| self.lookup(attacker, defender))
                .fold(0.0, f32::max);

            let bucket = if best == 0.0 {
                &mut profile.no_effect
            } else if best > 1.0 {
                &mut profile.super_effective
            } else if best < 1.0 {
                &mut profile.resisted
            } else {
                &mut profile.neutral
            };
            bucket.push(defender);
        }

        profile
    }
}
