//! Per-entity battle strategy summaries

use std::fmt;

use rotom_chart::{DefensiveProfile, OffensiveProfile, TypeChart, TypeMultiplier, TypeSet};
use rotom_dex::{AbilityInfo, Entity, PriorityMove, Registry};
use serde::Serialize;

use crate::config::RoleThresholds;
use crate::format::format_multiplier;
use crate::role::{infer_role, OffensiveBias, Role, SpeedTier, StatProfile};

/// One of the entity's abilities with its catalogue entry, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityNote<'a> {
    pub ability: &'a str,
    pub hidden: bool,
    pub info: Option<&'a AbilityInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySummary<'a> {
    #[serde(skip)]
    pub entity: &'a Entity,
    pub role: Role,
    pub stats: StatProfile,

    /// Offense of each owned type on its own
    pub stab: Vec<OffensiveProfile>,

    pub defense: DefensiveProfile,
    pub abilities: Vec<AbilityNote<'a>>,

    /// Owns an ability from the configured pivot list
    pub pivot: bool,

    /// Strongest attacking types, best first
    pub counters: Vec<TypeMultiplier>,

    /// Priority moves sharing one of the entity's types
    pub priority_moves: Vec<&'a PriorityMove>,

    pub notes: Vec<String>,
}

/// Build a strategy summary for one entity
pub fn strategy_summary<'a>(
    chart: &TypeChart,
    registry: &'a Registry,
    entity: &'a Entity,
    thresholds: &RoleThresholds,
) -> StrategySummary<'a> {
    let role = infer_role(entity, thresholds);
    let stats = StatProfile::new(&entity.stats, thresholds);
    let defense = chart.defensive_profile(&entity.types);

    let stab = entity
        .types
        .iter()
        .map(|ty| chart.offensive_profile(&TypeSet::single(ty)))
        .collect();

    let abilities: Vec<AbilityNote<'a>> = entity
        .abilities
        .iter()
        .map(|ability| AbilityNote {
            ability,
            hidden: entity.abilities.hidden.as_deref() == Some(ability),
            info: registry.ability(ability),
        })
        .collect();

    let pivot = thresholds
        .pivot_abilities
        .iter()
        .any(|p| entity.abilities.contains(p));

    let mut counters = chart.best_attackers(&entity.types);
    counters.truncate(thresholds.counter_limit);

    let priority_moves = entity
        .types
        .iter()
        .flat_map(|ty| registry.priority_moves_by_type(ty))
        .collect();

    let notes = strategy_notes(entity, &stats, &defense, pivot, thresholds);

    StrategySummary {
        entity,
        role,
        stats,
        stab,
        defense,
        abilities,
        pivot,
        counters,
        priority_moves,
        notes,
    }
}

fn strategy_notes(
    entity: &Entity,
    stats: &StatProfile,
    defense: &DefensiveProfile,
    pivot: bool,
    thresholds: &RoleThresholds,
) -> Vec<String> {
    let mut notes = Vec::new();

    notes.push(match stats.bias {
        OffensiveBias::Physical => "Focus on physical moves for STAB damage".to_string(),
        OffensiveBias::Special => "Focus on special moves for STAB damage".to_string(),
    });

    notes.push(if stats.speed_tier == SpeedTier::Fast {
        "Can outspeed most unboosted threats".to_string()
    } else if stats.speed < thresholds.trick_room_speed {
        "Consider Trick Room support".to_string()
    } else {
        "May need Speed investment or priority moves".to_string()
    });

    if let Some(worst) = defense.critical_weaknesses.first() {
        notes.push(format!(
            "CRITICAL: Avoid {} attackers at all costs",
            worst.ty.as_str().to_uppercase()
        ));
    }

    if pivot {
        notes.push("Can pivot in and out to absorb hits repeatedly".to_string());
    }

    if let Some(hidden) = &entity.abilities.hidden {
        notes.push(format!(
            "Hidden Ability {} may be competitively superior",
            hidden
        ));
    }

    notes
}

impl fmt::Display for StrategySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper = |ty: rotom_chart::Type| ty.as_str().to_uppercase();

        writeln!(f, "## Battle Strategy: {}", self.entity.name)?;
        writeln!(f)?;
        writeln!(f, "**Types:** {}", self.entity.types)?;
        if let Some(tier) = &self.entity.tier {
            writeln!(f, "**Tier:** {}", tier)?;
        }
        writeln!(f, "**Recommended Role:** {}", self.role)?;
        writeln!(f)?;

        writeln!(f, "### Stat Profile")?;
        writeln!(
            f,
            "- Offensive bias: {} (main stat {})",
            self.stats.bias, self.stats.main_stat
        )?;
        writeln!(f, "- Speed: {} ({})", self.stats.speed, self.stats.speed_tier)?;
        writeln!(
            f,
            "- Bulk: {} physical / {} special",
            self.stats.physical_bulk, self.stats.special_bulk
        )?;
        writeln!(f)?;

        writeln!(f, "### STAB Coverage")?;
        for profile in &self.stab {
            let hits: Vec<String> = profile.super_effective.iter().map(|t| upper(*t)).collect();
            writeln!(
                f,
                "- {}: super effective against {}",
                profile.attackers,
                if hits.is_empty() { "nothing".to_string() } else { hits.join(", ") }
            )?;
        }
        writeln!(f)?;

        writeln!(f, "### Threats")?;
        for weakness in &self.defense.critical_weaknesses {
            writeln!(f, "- {} (CRITICAL - 4× damage)", upper(weakness.ty))?;
        }
        for weakness in self.defense.double_weaknesses() {
            writeln!(f, "- {} ({})", upper(weakness.ty), format_multiplier(weakness.multiplier))?;
        }
        if self.defense.weaknesses.is_empty() {
            writeln!(f, "- None")?;
        }
        if !self.counters.is_empty() {
            let names: Vec<String> = self.counters.iter().map(|c| upper(c.ty)).collect();
            writeln!(f, "- Top counters: {}", names.join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "### Abilities")?;
        for note in &self.abilities {
            let hidden = if note.hidden { " (Hidden)" } else { "" };
            match note.info {
                Some(info) => {
                    writeln!(f, "- **{}**{} [{}]: {}", note.ability, hidden, info.category, info.effect)?
                }
                None => writeln!(f, "- **{}**{}", note.ability, hidden)?,
            }
        }
        if self.pivot {
            writeln!(f, "- Pivot ability present")?;
        }
        writeln!(f)?;

        if !self.priority_moves.is_empty() {
            writeln!(f, "### Priority Options")?;
            for mv in &self.priority_moves {
                let power = mv.power.map(|p| format!(" ({} BP)", p)).unwrap_or_default();
                writeln!(
                    f,
                    "- **{}**{} - Priority +{}: {}",
                    mv.name,
                    power,
                    mv.priority,
                    mv.effect.as_deref().unwrap_or("No special effect")
                )?;
            }
            writeln!(f)?;
        }

        write!(f, "### Notes")?;
        for note in &self.notes {
            write!(f, "\n- {}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rotom_chart::Type;
    use rotom_dex::KnowledgeBase;

    use super::*;

    #[test]
    fn test_garchomp_summary() {
        let kb = KnowledgeBase::bundled().unwrap();
        let garchomp = kb.registry.find("Garchomp").unwrap();
        let summary = strategy_summary(&kb.chart, &kb.registry, garchomp, &RoleThresholds::default());

        assert_eq!(summary.role, Role::PhysicalSweeper);
        assert_eq!(summary.stats.bias, OffensiveBias::Physical);
        assert_eq!(summary.stab.len(), 2);
        assert_eq!(summary.stab[0].attackers, TypeSet::single(Type::Dragon));

        assert_eq!(summary.defense.critical_weaknesses.len(), 1);
        assert_eq!(summary.defense.critical_weaknesses[0].ty, Type::Ice);
        let doubles: Vec<Type> = summary.defense.double_weaknesses().map(|w| w.ty).collect();
        assert_eq!(doubles, vec![Type::Dragon, Type::Fairy]);

        assert_eq!(summary.counters[0].ty, Type::Ice);
        assert!(!summary.pivot);
        assert!(summary.priority_moves.is_empty());
        assert!(summary
            .notes
            .iter()
            .any(|n| n == "CRITICAL: Avoid ICE attackers at all costs"));
    }

    #[test]
    fn test_abilities_and_pivot() {
        let kb = KnowledgeBase::bundled().unwrap();
        let toxapex = kb.registry.find("Toxapex").unwrap();
        let summary = strategy_summary(&kb.chart, &kb.registry, toxapex, &RoleThresholds::default());

        assert!(summary.pivot);
        assert_eq!(summary.abilities.len(), 3);
        assert!(summary.abilities[0].info.is_none());
        let regenerator = &summary.abilities[2];
        assert!(regenerator.hidden);
        assert_eq!(regenerator.info.map(|i| i.name.as_str()), Some("Regenerator"));
        assert!(summary.notes.iter().any(|n| n.contains("Consider Trick Room")));
    }

    #[test]
    fn test_counter_limit_and_stab_priority() {
        let kb = KnowledgeBase::bundled().unwrap();
        let scizor = kb.registry.find("Scizor").unwrap();
        let thresholds = RoleThresholds {
            counter_limit: 0,
            ..RoleThresholds::default()
        };
        let summary = strategy_summary(&kb.chart, &kb.registry, scizor, &thresholds);

        assert!(summary.counters.is_empty());
        let moves: Vec<&str> = summary.priority_moves.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(moves, vec!["First Impression", "Bullet Punch"]);
    }

    #[test]
    fn test_render() {
        let kb = KnowledgeBase::bundled().unwrap();
        let dragonite = kb.registry.find("dragonite").unwrap();
        let text = strategy_summary(&kb.chart, &kb.registry, dragonite, &RoleThresholds::default())
            .to_string();

        assert!(text.starts_with("## Battle Strategy: Dragonite"));
        assert!(text.contains("**Recommended Role:** Bulky Attacker"));
        assert!(text.contains("- ICE (CRITICAL - 4× damage)"));
        assert!(text.contains("- **Multiscale** (Hidden) [Defensive]"));
        assert!(!text.contains("### Priority Options"));
    }
}
