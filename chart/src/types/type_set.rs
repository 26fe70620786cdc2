//! One- or two-type typings

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pokemon_type::Type;
use crate::error::TypeError;

/// A Pokemon's typing: one type, or two distinct types
///
/// Order is kept for display ("Water/Ground" vs "Ground/Water") but never
/// changes a computed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Type>", into = "Vec<Type>")
)]
pub struct TypeSet {
    primary: Type,
    secondary: Option<Type>,
}

impl TypeSet {
    /// A single-type typing
    pub fn single(ty: Type) -> Self {
        Self {
            primary: ty,
            secondary: None,
        }
    }

    /// A dual typing; the two types must differ
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, TypeError> {
        if primary == secondary {
            return Err(TypeError::Duplicate(primary));
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    /// Build from a slice of 1-2 distinct types
    pub fn new(types: &[Type]) -> Result<Self, TypeError> {
        match types {
            [] => Err(TypeError::Empty),
            [single] => Ok(Self::single(*single)),
            [primary, secondary] => Self::dual(*primary, *secondary),
            more => Err(TypeError::TooMany(more.len())),
        }
    }

    /// Parse each name and build the set
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, TypeError> {
        let types = names
            .iter()
            .map(|n| n.as_ref().parse::<Type>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&types)
    }

    pub fn primary(&self) -> Type {
        self.primary
    }

    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    /// 1 or 2
    pub fn len(&self) -> usize {
        if self.secondary.is_some() { 2 } else { 1 }
    }

    /// Always false; present for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    /// Iterate types in display order
    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn contains(&self, ty: Type) -> bool {
        self.primary == ty || self.secondary == Some(ty)
    }

    pub fn to_vec(&self) -> Vec<Type> {
        self.iter().collect()
    }

    /// Same types regardless of order
    pub fn same_types(&self, other: &TypeSet) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl From<Type> for TypeSet {
    fn from(ty: Type) -> Self {
        Self::single(ty)
    }
}

impl TryFrom<Vec<Type>> for TypeSet {
    type Error = TypeError;

    fn try_from(types: Vec<Type>) -> Result<Self, Self::Error> {
        Self::new(&types)
    }
}

impl From<TypeSet> for Vec<Type> {
    fn from(set: TypeSet) -> Self {
        set.to_vec()
    }
}

impl FromStr for TypeSet {
    type Err = TypeError;

    /// Accepts "fire", "Fire/Flying", "fire flying" or "fire,flying"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s
            .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        Self::from_names(&names)
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}
