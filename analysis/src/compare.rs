//! Head-to-head comparison of two entities

use std::fmt;

use rotom_chart::TypeChart;
use rotom_dex::{Entity, Registry, Stat};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Which side of a comparison comes out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Winner {
    Left,
    Right,
    Tie,
}

impl Winner {
    /// Strictly greater side wins
    pub fn of<T: PartialOrd>(left: T, right: T) -> Self {
        if left > right {
            Winner::Left
        } else if right > left {
            Winner::Right
        } else {
            Winner::Tie
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Winner::Left => Winner::Right,
            Winner::Right => Winner::Left,
            Winner::Tie => Winner::Tie,
        }
    }
}

/// Which names in a comparison failed to resolve
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", describe_unresolved(.left.as_deref(), .right.as_deref()))]
pub struct Unresolved {
    pub left: Option<String>,
    pub right: Option<String>,
}

fn describe_unresolved(left: Option<&str>, right: Option<&str>) -> String {
    match (left, right) {
        (Some(l), Some(r)) => format!("Could not find \"{}\" or \"{}\"", l, r),
        (Some(name), None) | (None, Some(name)) => format!("Could not find \"{}\"", name),
        (None, None) => "Nothing to resolve".to_string(),
    }
}

/// One compared figure; `stat` is `None` for the base stat total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub stat: Option<Stat>,
    pub left: u32,
    pub right: u32,
    pub winner: Winner,
}

impl StatRow {
    pub fn label(&self) -> &'static str {
        self.stat.map_or("Total", |s| s.label())
    }

    fn flip(self) -> Self {
        Self {
            stat: self.stat,
            left: self.right,
            right: self.left,
            winner: self.winner.flip(),
        }
    }
}

/// Best multiplier each side's typing lands on the other
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAdvantage {
    pub left_vs_right: f32,
    pub right_vs_left: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison<'a> {
    #[serde(serialize_with = "serialize_name")]
    pub left: &'a Entity,
    #[serde(serialize_with = "serialize_name")]
    pub right: &'a Entity,

    /// Six stats in canonical order, then the total
    pub rows: Vec<StatRow>,

    pub advantage: TypeAdvantage,
}

fn serialize_name<S: serde::Serializer>(entity: &&Entity, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&entity.name)
}

impl<'a> Comparison<'a> {
    pub fn new(chart: &TypeChart, left: &'a Entity, right: &'a Entity) -> Self {
        let mut rows: Vec<StatRow> = Stat::ALL
            .into_iter()
            .map(|stat| {
                let (l, r) = (u32::from(left.stats.get(stat)), u32::from(right.stats.get(stat)));
                StatRow {
                    stat: Some(stat),
                    left: l,
                    right: r,
                    winner: Winner::of(l, r),
                }
            })
            .collect();
        let (l, r) = (left.stats.total(), right.stats.total());
        rows.push(StatRow {
            stat: None,
            left: l,
            right: r,
            winner: Winner::of(l, r),
        });

        Self {
            left,
            right,
            rows,
            advantage: TypeAdvantage {
                left_vs_right: chart.best_multiplier(&left.types, &right.types),
                right_vs_left: chart.best_multiplier(&right.types, &left.types),
            },
        }
    }

    /// The same comparison seen from the other side
    pub fn mirrored(&self) -> Comparison<'a> {
        Comparison {
            left: self.right,
            right: self.left,
            rows: self.rows.iter().map(|row| row.flip()).collect(),
            advantage: TypeAdvantage {
                left_vs_right: self.advantage.right_vs_left,
                right_vs_left: self.advantage.left_vs_right,
            },
        }
    }

    pub fn row(&self, stat: Stat) -> Option<&StatRow> {
        self.rows.iter().find(|row| row.stat == Some(stat))
    }

    pub fn total(&self) -> Option<&StatRow> {
        self.rows.iter().find(|row| row.stat.is_none())
    }

    pub fn type_edge(&self) -> Winner {
        Winner::of(self.advantage.left_vs_right, self.advantage.right_vs_left)
    }

    pub fn higher_total(&self) -> Winner {
        Winner::of(self.left.stats.total(), self.right.stats.total())
    }

    pub fn faster(&self) -> Winner {
        Winner::of(self.left.stats.speed, self.right.stats.speed)
    }

    /// HP + Defense + Sp. Def
    pub fn bulkier(&self) -> Winner {
        Winner::of(
            self.left.stats.defensive_sum(),
            self.right.stats.defensive_sum(),
        )
    }
}

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |winner: Winner| match winner {
            Winner::Left => self.left.name.as_str(),
            Winner::Right => self.right.name.as_str(),
            Winner::Tie => "Tie",
        };

        writeln!(f, "## {} vs {}", self.left.name, self.right.name)?;
        writeln!(f)?;
        writeln!(f, "| Stat | {} | {} | Winner |", self.left.name, self.right.name)?;
        writeln!(f, "|------|---|---|--------|")?;
        for row in &self.rows {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                row.label(),
                row.left,
                row.right,
                name(row.winner)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "### Type Matchup")?;
        writeln!(
            f,
            "- {} → {}: {}x",
            self.left.name, self.right.name, self.advantage.left_vs_right
        )?;
        writeln!(
            f,
            "- {} → {}: {}x",
            self.right.name, self.left.name, self.advantage.right_vs_left
        )?;
        writeln!(f)?;
        writeln!(f, "### Verdict")?;
        writeln!(f, "- Type advantage: {}", name(self.type_edge()))?;
        writeln!(f, "- Higher total: {}", name(self.higher_total()))?;
        writeln!(f, "- Faster: {}", name(self.faster()))?;
        write!(f, "- Bulkier: {}", name(self.bulkier()))
    }
}

/// Resolve both names and compare them
///
/// Either name failing to resolve yields [`Unresolved`] naming the missing
/// side(s); nothing is computed in that case.
pub fn compare<'a>(
    chart: &TypeChart,
    registry: &'a Registry,
    left: &str,
    right: &str,
) -> Result<Comparison<'a>, Unresolved> {
    match (registry.find(left), registry.find(right)) {
        (Some(l), Some(r)) => Ok(Comparison::new(chart, l, r)),
        (l, r) => {
            let unresolved = Unresolved {
                left: l.is_none().then(|| left.to_string()),
                right: r.is_none().then(|| right.to_string()),
            };
            debug!(?unresolved, "Comparison could not resolve both names");
            Err(unresolved)
        }
    }
}

#[cfg(test)]
mod tests {
    use rotom_dex::KnowledgeBase;

    use super::*;

    #[test]
    fn test_self_comparison_is_all_ties() {
        let kb = KnowledgeBase::bundled().unwrap();
        let cmp = compare(&kb.chart, &kb.registry, "charizard", "Charizard").unwrap();
        assert_eq!(cmp.rows.len(), 7);
        assert!(cmp.rows.iter().all(|row| row.winner == Winner::Tie));
        assert_eq!(cmp.advantage.left_vs_right, cmp.advantage.right_vs_left);
        assert_eq!(cmp.type_edge(), Winner::Tie);
    }

    #[test]
    fn test_mirror_symmetry() {
        let kb = KnowledgeBase::bundled().unwrap();
        let names = ["Garchomp", "Dragonite", "Blissey", "Tyranitar", "Lucario"];
        for a in names {
            for b in names {
                let ab = compare(&kb.chart, &kb.registry, a, b).unwrap();
                let ba = compare(&kb.chart, &kb.registry, b, a).unwrap();
                assert_eq!(ab.mirrored(), ba, "{a} vs {b}");
                assert_eq!(ab.advantage.left_vs_right, ba.advantage.right_vs_left);
            }
        }
    }

    #[test]
    fn test_rows_and_verdicts() {
        let kb = KnowledgeBase::bundled().unwrap();
        let cmp = compare(&kb.chart, &kb.registry, "Garchomp", "Dragonite").unwrap();

        assert_eq!(cmp.row(Stat::Speed).unwrap().winner, Winner::Left);
        assert_eq!(cmp.row(Stat::Attack).unwrap().winner, Winner::Right);
        assert_eq!(cmp.total().unwrap().winner, Winner::Tie);
        assert_eq!(cmp.total().unwrap().label(), "Total");

        // Dragon hits both ways; Ground cannot touch Dragonite
        assert_eq!(cmp.advantage.left_vs_right, 2.0);
        assert_eq!(cmp.advantage.right_vs_left, 2.0);
        assert_eq!(cmp.faster(), Winner::Left);
        assert_eq!(cmp.higher_total(), Winner::Tie);
        assert_eq!(cmp.bulkier(), Winner::Left);
    }

    #[test]
    fn test_type_edge() {
        let kb = KnowledgeBase::bundled().unwrap();
        let cmp = compare(&kb.chart, &kb.registry, "Swampert", "Charizard").unwrap();
        assert_eq!(cmp.advantage.left_vs_right, 2.0);
        assert_eq!(cmp.advantage.right_vs_left, 1.0);
        assert_eq!(cmp.type_edge(), Winner::Left);
    }

    #[test]
    fn test_unresolved_names_missing_sides() {
        let kb = KnowledgeBase::bundled().unwrap();

        let err = compare(&kb.chart, &kb.registry, "Pikachu", "Agumon").unwrap_err();
        assert_eq!(err.left, None);
        assert_eq!(err.right.as_deref(), Some("Agumon"));
        assert_eq!(err.to_string(), "Could not find \"Agumon\"");

        let err = compare(&kb.chart, &kb.registry, "Digimon", "Agumon").unwrap_err();
        assert_eq!(err.left.as_deref(), Some("Digimon"));
        assert_eq!(err.right.as_deref(), Some("Agumon"));
    }

    #[test]
    fn test_render() {
        let kb = KnowledgeBase::bundled().unwrap();
        let text = compare(&kb.chart, &kb.registry, "Swampert", "Charizard")
            .unwrap()
            .to_string();
        assert!(text.starts_with("## Swampert vs Charizard"));
        assert!(text.contains("| Sp. Atk | 85 | 109 | Charizard |"));
        assert!(text.contains("- Type advantage: Swampert"));
    }
}
