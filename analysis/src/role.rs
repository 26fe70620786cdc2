//! Stat-driven role classification

use std::fmt;

use rotom_dex::{Entity, StatBlock};
use serde::Serialize;

use crate::config::RoleThresholds;

/// Battle role suggested by an entity's stat spread
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    PhysicalSweeper,
    SpecialSweeper,
    Wall,
    BulkyAttacker,
    RevengeKiller,
    TrickRoomSweeper,
    /// Curated label carried by the entity record
    Curated(String),
    Flexible,
}

impl Role {
    pub fn label(&self) -> &str {
        match self {
            Role::PhysicalSweeper => "Physical Sweeper",
            Role::SpecialSweeper => "Special Sweeper",
            Role::Wall => "Wall",
            Role::BulkyAttacker => "Bulky Attacker",
            Role::RevengeKiller => "Revenge Killer",
            Role::TrickRoomSweeper => "Trick Room Sweeper",
            Role::Curated(label) => label,
            Role::Flexible => "Flexible",
        }
    }

    pub fn is_sweeper(&self) -> bool {
        matches!(
            self,
            Role::PhysicalSweeper | Role::SpecialSweeper | Role::TrickRoomSweeper
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OffensiveBias {
    Physical,
    Special,
}

impl fmt::Display for OffensiveBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffensiveBias::Physical => write!(f, "Physical"),
            OffensiveBias::Special => write!(f, "Special"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpeedTier {
    Fast,
    Medium,
    Slow,
}

impl fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedTier::Fast => write!(f, "Fast"),
            SpeedTier::Medium => write!(f, "Medium"),
            SpeedTier::Slow => write!(f, "Slow"),
        }
    }
}

/// Derived offensive and defensive figures for one stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatProfile {
    pub bias: OffensiveBias,

    /// The stat matching `bias`
    pub main_stat: u16,

    pub speed: u16,
    pub speed_tier: SpeedTier,

    /// (2 * HP + Defense) / 3
    pub physical_bulk: u16,

    /// (2 * HP + Sp. Def) / 3
    pub special_bulk: u16,
}

impl StatProfile {
    pub fn new(stats: &StatBlock, thresholds: &RoleThresholds) -> Self {
        let bias = if stats.attack > stats.special_attack {
            OffensiveBias::Physical
        } else {
            OffensiveBias::Special
        };
        let main_stat = match bias {
            OffensiveBias::Physical => stats.attack,
            OffensiveBias::Special => stats.special_attack,
        };
        let speed_tier = if stats.speed > thresholds.fast_speed {
            SpeedTier::Fast
        } else if stats.speed > thresholds.medium_speed {
            SpeedTier::Medium
        } else {
            SpeedTier::Slow
        };
        let hp = u32::from(stats.hp) * 2;
        Self {
            bias,
            main_stat,
            speed: stats.speed,
            speed_tier,
            physical_bulk: ((hp + u32::from(stats.defense)) / 3) as u16,
            special_bulk: ((hp + u32::from(stats.special_defense)) / 3) as u16,
        }
    }
}

/// Pick a role from stats alone, falling back to the entity's curated label.
///
/// The first matching rule wins:
///
/// 1. fast with high offense: a sweeper, physical when Attack beats Sp. Atk
/// 2. bulky without high offense: [`Role::Wall`]
/// 3. bulky with high offense: [`Role::BulkyAttacker`]
/// 4. fast and frail: [`Role::RevengeKiller`]
/// 5. slow with strong Attack: [`Role::TrickRoomSweeper`]
/// 6. the curated role, else [`Role::Flexible`]
pub fn infer_role(entity: &Entity, thresholds: &RoleThresholds) -> Role {
    let stats = &entity.stats;
    let fast = stats.speed > thresholds.fast_speed;
    let bulky = stats.defensive_mean() > thresholds.bulky_mean;
    let high_offense = stats.best_offense() >= thresholds.high_offense;

    if fast && high_offense {
        if stats.attack > stats.special_attack {
            Role::PhysicalSweeper
        } else {
            Role::SpecialSweeper
        }
    } else if bulky && !high_offense {
        Role::Wall
    } else if bulky {
        Role::BulkyAttacker
    } else if fast {
        Role::RevengeKiller
    } else if stats.speed < thresholds.trick_room_speed
        && stats.attack >= thresholds.trick_room_attack
    {
        Role::TrickRoomSweeper
    } else {
        match &entity.role {
            Some(label) => Role::Curated(label.clone()),
            None => Role::Flexible,
        }
    }
}
