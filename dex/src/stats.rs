//! Base stats

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Display label ("Sp. Atk")
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Sp. Atk",
            Stat::SpecialDefense => "Sp. Def",
            Stat::Speed => "Speed",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Base stat block; the total is always derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl StatBlock {
    pub fn new(
        hp: u16,
        attack: u16,
        defense: u16,
        special_attack: u16,
        special_defense: u16,
        speed: u16,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Get a single stat
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set a single stat
    pub fn set(&mut self, stat: Stat, value: u16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Base stat total; six `u16` stats always fit in a `u32`
    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|s| u32::from(self.get(*s))).sum()
    }

    /// HP + Defense + Sp. Def
    pub fn defensive_sum(&self) -> u32 {
        u32::from(self.hp) + u32::from(self.defense) + u32::from(self.special_defense)
    }

    /// Mean of HP, Defense and Sp. Def
    pub fn defensive_mean(&self) -> f32 {
        self.defensive_sum() as f32 / 3.0
    }

    /// Higher of the two offensive stats
    pub fn best_offense(&self) -> u16 {
        self.attack.max(self.special_attack)
    }

    /// Apply per-stat deltas, clamping at 0
    pub fn apply(&self, deltas: &StatDeltas) -> StatBlock {
        let mut out = *self;
        for stat in Stat::ALL {
            let value = i32::from(self.get(stat)) + i32::from(deltas.get(stat));
            out.set(stat, value.clamp(0, i32::from(u16::MAX)) as u16);
        }
        out
    }

    /// Per-stat change from `self` to `other`, saturating at the `i16` bounds
    pub fn diff(&self, other: &StatBlock) -> StatDeltas {
        let mut deltas = StatDeltas::default();
        for stat in Stat::ALL {
            let change = i32::from(other.get(stat)) - i32::from(self.get(stat));
            let change = change.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
            deltas.set(stat, change);
        }
        deltas
    }
}

/// Signed per-stat changes, used by alternate forms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatDeltas {
    pub hp: i16,
    pub attack: i16,
    pub defense: i16,
    pub special_attack: i16,
    pub special_defense: i16,
    pub speed: i16,
}

impl StatDeltas {
    pub fn get(&self, stat: Stat) -> i16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Sum of all deltas
    pub fn total(&self) -> i32 {
        Stat::ALL.iter().map(|s| i32::from(self.get(*s))).sum()
    }

    /// Stats that actually changed
    pub fn changed(&self) -> impl Iterator<Item = (Stat, i16)> + '_ {
        Stat::ALL
            .into_iter()
            .map(|s| (s, self.get(s)))
            .filter(|(_, delta)| *delta != 0)
    }

    pub fn is_zero(&self) -> bool {
        self.changed().next().is_none()
    }
}
