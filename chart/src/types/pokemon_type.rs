//! The closed set of Pokemon types

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The eighteen elemental types, in canonical chart order.
///
/// The discriminants follow the canonical order used for every tie-break in
/// this workspace, and index rows/columns of [`TypeChart`](crate::TypeChart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// Number of types
    pub const COUNT: usize = 18;

    /// All 18 types in canonical order
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Row/column index into the chart
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name ("Fire")
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// Lowercase identifier used in knowledge-base records ("fire")
    pub fn id(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }
}

impl FromStr for Type {
    type Err = TypeError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Type::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| TypeError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Fire".parse::<Type>(), Ok(Type::Fire));
        assert_eq!("fire".parse::<Type>(), Ok(Type::Fire));
        assert_eq!("FIRE".parse::<Type>(), Ok(Type::Fire));
        assert_eq!(" psychic ".parse::<Type>(), Ok(Type::Psychic));
    }

    #[test]
    fn test_parse_unknown_is_rejected() {
        assert_eq!(
            "shadow".parse::<Type>(),
            Err(TypeError::Unknown("shadow".to_string()))
        );
        assert!("".parse::<Type>().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(Type::Fire.as_str(), "Fire");
        assert_eq!(Type::Fairy.id(), "fairy");
        assert_eq!(Type::Dark.to_string(), "Dark");
    }

    #[test]
    fn test_all_types_in_canonical_order() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
        for (i, t) in Type::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_every_id_round_trips() {
        for t in Type::ALL {
            assert_eq!(t.id().parse::<Type>(), Ok(t));
            assert_eq!(t.as_str().parse::<Type>(), Ok(t));
        }
    }
}
