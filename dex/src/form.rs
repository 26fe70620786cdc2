//! Alternate forms: regional variants and power-up forms

use std::fmt;
use std::str::FromStr;

use rotom_chart::TypeSet;
use serde::Serialize;

use crate::ability::AbilitySet;
use crate::entity::Entity;
use crate::stats::{StatBlock, StatDeltas};

/// Regions with their own variants of older species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    Alola,
    Galar,
    Hisui,
    Paldea,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Alola, Region::Galar, Region::Hisui, Region::Paldea];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Alola => "Alola",
            Region::Galar => "Galar",
            Region::Hisui => "Hisui",
            Region::Paldea => "Paldea",
        }
    }

    /// Adjective used in form names ("Alolan")
    pub fn adjective(&self) -> &'static str {
        match self {
            Region::Alola => "Alolan",
            Region::Galar => "Galarian",
            Region::Hisui => "Hisuian",
            Region::Paldea => "Paldean",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    /// Accepts the region ("Alola") or its adjective ("alolan")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(&wanted) || r.adjective().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormKind {
    Mega,
    Regional(Region),
    Gigantamax,
    Special,
}

/// How a form changes base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatOverride {
    Full(StatBlock),
    Deltas(StatDeltas),
}

/// A partial override of its base entity; unset fields inherit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateForm {
    pub name: String,
    pub kind: FormKind,
    pub types: Option<TypeSet>,
    pub stats: Option<StatOverride>,
    pub abilities: Option<AbilitySet>,
    pub lore: Option<String>,
    pub evolution_note: Option<String>,
}

impl AlternateForm {
    pub fn is_mega(&self) -> bool {
        self.kind == FormKind::Mega
    }

    pub fn region(&self) -> Option<Region> {
        match self.kind {
            FormKind::Regional(region) => Some(region),
            _ => None,
        }
    }
}

/// A form resolved against its base entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView<'a> {
    #[serde(skip)]
    pub base: &'a Entity,
    #[serde(skip)]
    pub form: &'a AlternateForm,
    pub name: &'a str,
    pub types: TypeSet,
    pub stats: StatBlock,
    pub abilities: &'a AbilitySet,
}

impl<'a> FormView<'a> {
    pub fn resolve(base: &'a Entity, form: &'a AlternateForm) -> Self {
        let stats = match form.stats {
            Some(StatOverride::Full(block)) => block,
            Some(StatOverride::Deltas(deltas)) => base.stats.apply(&deltas),
            None => base.stats,
        };
        Self {
            base,
            form,
            name: &form.name,
            types: form.types.unwrap_or(base.types),
            stats,
            abilities: form.abilities.as_ref().unwrap_or(&base.abilities),
        }
    }

    pub fn type_changed(&self) -> bool {
        !self.types.same_types(&self.base.types)
    }

    /// Stat changes versus the base entity
    pub fn stat_changes(&self) -> StatDeltas {
        self.base.stats.diff(&self.stats)
    }

    /// Change in base stat total versus the base entity
    pub fn total_change(&self) -> i64 {
        i64::from(self.stats.total()) - i64::from(self.base.stats.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parse() {
        assert_eq!("alolan".parse::<Region>(), Ok(Region::Alola));
        assert_eq!("Galar".parse::<Region>(), Ok(Region::Galar));
        assert_eq!(" HISUIAN ".parse::<Region>(), Ok(Region::Hisui));
        assert_eq!("kanto".parse::<Region>(), Err("kanto".to_string()));
    }
}
