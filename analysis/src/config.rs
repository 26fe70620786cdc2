use serde::{Deserialize, Serialize};

/// Stat cut-offs used when classifying entities
///
/// Every field has a default, so a partial JSON object only overrides what
/// it names:
///
/// ```
/// use rotom_analysis::RoleThresholds;
///
/// let thresholds: RoleThresholds = serde_json::from_str(r#"{"fastSpeed": 100}"#).unwrap();
/// assert_eq!(thresholds.fast_speed, 100);
/// assert_eq!(thresholds.high_offense, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleThresholds {
    /// Fast when Speed is strictly above this
    pub fast_speed: u16,

    /// Bulky when the mean of HP, Defense and Sp. Def is strictly above this
    pub bulky_mean: f32,

    /// High offense when the better attacking stat reaches this
    pub high_offense: u16,

    /// Trick Room candidate when Speed is strictly below this...
    pub trick_room_speed: u16,

    /// ...and Attack reaches this
    pub trick_room_attack: u16,

    /// Medium speed tier when Speed is strictly above this (and not fast)
    pub medium_speed: u16,

    /// Counters listed in strategy summaries
    pub counter_limit: usize,

    /// Abilities that mark an entity as a pivot
    pub pivot_abilities: Vec<String>,
}

impl Default for RoleThresholds {
    fn default() -> Self {
        Self {
            fast_speed: 95,
            bulky_mean: 90.0,
            high_offense: 100,
            trick_room_speed: 50,
            trick_room_attack: 100,
            medium_speed: 70,
            counter_limit: 5,
            pivot_abilities: vec!["Regenerator".to_string(), "Intimidate".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let thresholds: RoleThresholds = serde_json::from_str("{}").unwrap();
        assert_eq!(thresholds, RoleThresholds::default());
    }

    #[test]
    fn test_pivot_list_override() {
        let thresholds: RoleThresholds =
            serde_json::from_str(r#"{"pivotAbilities": ["Regenerator"], "counterLimit": 3}"#)
                .unwrap();
        assert_eq!(thresholds.pivot_abilities, vec!["Regenerator"]);
        assert_eq!(thresholds.counter_limit, 3);
        assert_eq!(thresholds.fast_speed, 95);
    }
}
