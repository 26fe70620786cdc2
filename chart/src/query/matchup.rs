//! Single attacking type against a typing, with a recommendation

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::chart::TypeChart;
use crate::types::{Effectiveness, Type, TypeSet};

/// What to do with an attacking type against a given typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Recommendation {
    /// Super effective; lead with it
    Lead,
    /// Neutral damage
    Acceptable,
    /// Resisted; look for other coverage
    Avoid,
    /// No effect at all
    Useless,
}

impl Recommendation {
    pub fn for_multiplier(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Recommendation::Useless
        } else if multiplier >= 2.0 {
            Recommendation::Lead
        } else if multiplier < 1.0 {
            Recommendation::Avoid
        } else {
            Recommendation::Acceptable
        }
    }
}

/// One attacking type against one typing
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MatchupAnalysis {
    pub attacker: Type,
    pub defenders: TypeSet,
    pub multiplier: f32,
    pub effectiveness: Option<Effectiveness>,
    pub recommendation: Recommendation,
}

/// Analyze a single attacking type against a typing
pub fn analyze_matchup(chart: &TypeChart, attacker: Type, defenders: &TypeSet) -> MatchupAnalysis {
    let multiplier = chart.combined_multiplier(attacker, defenders);
    MatchupAnalysis {
        attacker,
        defenders: *defenders,
        multiplier,
        effectiveness: Effectiveness::describe(multiplier),
        recommendation: Recommendation::for_multiplier(multiplier),
    }
}

impl fmt::Display for MatchupAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attacker = self.attacker.as_str().to_uppercase();
        let defenders = self.defenders;
        match self.recommendation {
            Recommendation::Lead => write!(
                f,
                "{attacker} is a strong choice against {defenders}. Consider leading with this type."
            ),
            Recommendation::Useless => write!(
                f,
                "{attacker} has no effect on {defenders}. Avoid using this type entirely."
            ),
            Recommendation::Avoid => write!(
                f,
                "{attacker} is resisted by {defenders}. Consider alternative coverage."
            ),
            Recommendation::Acceptable => write!(
                f,
                "{attacker} deals neutral damage to {defenders}. Acceptable but not optimal."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(types: &[Type]) -> TypeSet {
        TypeSet::new(types).unwrap()
    }

    #[test]
    fn test_analyze_matchup() {
        let chart = TypeChart::standard();
        let analysis = analyze_matchup(chart, Type::Ice, &set(&[Type::Dragon, Type::Flying]));
        assert_eq!(analysis.multiplier, 4.0);
        assert_eq!(analysis.effectiveness, Some(Effectiveness::Quadruple));
        assert_eq!(analysis.recommendation, Recommendation::Lead);
        assert_eq!(
            analysis.to_string(),
            "ICE is a strong choice against Dragon/Flying. Consider leading with this type."
        );

        let blank = analyze_matchup(chart, Type::Normal, &set(&[Type::Ghost]));
        assert_eq!(blank.recommendation, Recommendation::Useless);
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(Recommendation::for_multiplier(0.0), Recommendation::Useless);
        assert_eq!(Recommendation::for_multiplier(0.25), Recommendation::Avoid);
        assert_eq!(Recommendation::for_multiplier(0.5), Recommendation::Avoid);
        assert_eq!(Recommendation::for_multiplier(1.0), Recommendation::Acceptable);
        assert_eq!(Recommendation::for_multiplier(2.0), Recommendation::Lead);
        assert_eq!(Recommendation::for_multiplier(4.0), Recommendation::Lead);
    }
}
