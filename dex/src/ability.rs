//! Abilities: per-entity sets and the strategic ability catalogue

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_name;

/// An entity's abilities: ordered regular abilities plus at most one hidden
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySet {
    pub normal: Vec<String>,
    pub hidden: Option<String>,
}

impl AbilitySet {
    pub fn new(normal: Vec<String>, hidden: Option<String>) -> Self {
        Self { normal, hidden }
    }

    /// A set holding exactly one regular ability
    pub fn only(name: impl Into<String>) -> Self {
        Self {
            normal: vec![name.into()],
            hidden: None,
        }
    }

    /// Regular abilities first, then the hidden one
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.normal
            .iter()
            .map(String::as_str)
            .chain(self.hidden.as_deref())
    }

    /// Name comparison after normalization
    pub fn contains(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        self.iter().any(|a| normalize_name(a) == wanted)
    }

    /// Hidden ability if there is one, else the first regular ability
    pub fn preferred(&self) -> Option<&str> {
        self.hidden
            .as_deref()
            .or_else(|| self.normal.first().map(String::as_str))
    }
}

/// Strategic grouping of catalogued abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    Weather,
    Terrain,
    Offensive,
    Defensive,
    Speed,
}

impl AbilityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityCategory::Weather => "Weather",
            AbilityCategory::Terrain => "Terrain",
            AbilityCategory::Offensive => "Offensive",
            AbilityCategory::Defensive => "Defensive",
            AbilityCategory::Speed => "Speed",
        }
    }
}

impl fmt::Display for AbilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Catalogue entry for an ability with notable strategic use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityInfo {
    pub name: String,
    pub category: AbilityCategory,
    pub effect: String,
    #[serde(default)]
    pub synergies: Vec<String>,
    #[serde(default)]
    pub enables: Vec<String>,
    #[serde(default)]
    pub prevents: Vec<String>,
    #[serde(default)]
    pub best_for: Option<String>,
}

/// A named team strategy built from two or more abilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCombo {
    pub name: String,
    pub abilities: Vec<String>,
    pub strategy: String,
}

/// Ability synergy found across a team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSynergy {
    /// Last weather setter found on the team
    pub weather_setter: Option<String>,

    /// Last terrain setter found on the team
    pub terrain_setter: Option<String>,

    /// "Setter + partner, partner" pairs where a team member lists the other as a synergy
    pub ability_combos: Vec<String>,

    /// "Combo: strategy" lines for combos with at least two members present
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_set_iteration_order() {
        let set = AbilitySet::new(
            vec!["Soundproof".to_string(), "Filter".to_string()],
            Some("Technician".to_string()),
        );
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec!["Soundproof", "Filter", "Technician"]
        );
        assert_eq!(set.preferred(), Some("Technician"));
    }

    #[test]
    fn test_ability_set_contains_normalizes() {
        let set = AbilitySet::new(vec!["Sand Stream".to_string()], None);
        assert!(set.contains("sand_stream"));
        assert!(set.contains("SAND STREAM"));
        assert!(!set.contains("Sand Rush"));
        assert_eq!(set.preferred(), Some("Sand Stream"));
        assert_eq!(AbilitySet::default().preferred(), None);
    }

    #[test]
    fn test_info_deserializes_with_defaults() {
        let info: AbilityInfo = serde_json::from_str(
            r#"{"name":"Drought","category":"weather","effect":"Summons harsh sunlight."}"#,
        )
        .unwrap();
        assert_eq!(info.category, AbilityCategory::Weather);
        assert!(info.synergies.is_empty());
        assert_eq!(info.best_for, None);
    }
}
