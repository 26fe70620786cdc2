//! Markdown-flavoured text rendering
//!
//! The cards are [`fmt::Display`] wrappers, so [`Answer`](crate::Answer)
//! writes them straight into its own formatter.

use std::fmt;

use rotom_chart::{DefensiveProfile, Type, TypeChart, TypeMultiplier, TypeSet};
use rotom_dex::{Entity, FormView, Stat, StatBlock};

/// "4x", "0.5x", "0.25x"
pub fn format_multiplier(multiplier: f32) -> String {
    format!("{}x", multiplier)
}

/// Upper-case, slash separated ("WATER/GROUND")
pub fn format_types(types: &TypeSet) -> String {
    types
        .iter()
        .map(|t| t.as_str().to_uppercase())
        .collect::<Vec<_>>()
        .join("/")
}

/// "Rock (4x), Water (2x)"
struct Multipliers<'a>(&'a [TypeMultiplier]);

impl fmt::Display for Multipliers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", entry.ty, format_multiplier(entry.multiplier))?;
        }
        Ok(())
    }
}

fn join_types(types: &[Type]) -> String {
    types.iter().map(Type::as_str).collect::<Vec<_>>().join(", ")
}

fn write_matchups(f: &mut fmt::Formatter<'_>, profile: &DefensiveProfile) -> fmt::Result {
    write!(f, "### Type Matchups")?;
    if !profile.weaknesses.is_empty() {
        write!(f, "\n**Weaknesses:** {}", Multipliers(&profile.weaknesses))?;
    }
    if !profile.resistances.is_empty() {
        write!(f, "\n**Resistances:** {}", Multipliers(&profile.resistances))?;
    }
    if !profile.immunities.is_empty() {
        write!(f, "\n**Immunities:** {}", join_types(&profile.immunities))?;
    }
    Ok(())
}

fn write_stats(f: &mut fmt::Formatter<'_>, stats: &StatBlock) -> fmt::Result {
    write!(f, "### Base Stats")?;
    for stat in Stat::ALL {
        write!(f, "\n- {}: {}", stat, stats.get(stat))?;
    }
    write!(f, "\n- **Total:** {}", stats.total())
}

/// Full entry text for an entity
#[derive(Debug, Clone, Copy)]
pub struct EntityCard<'a> {
    chart: &'a TypeChart,
    entity: &'a Entity,
}

pub fn entity_card<'a>(chart: &'a TypeChart, entity: &'a Entity) -> EntityCard<'a> {
    EntityCard { chart, entity }
}

impl fmt::Display for EntityCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entity = self.entity;

        writeln!(f, "## {} (#{})", entity.name, entity.id)?;
        writeln!(f, "**Type:** {}", format_types(&entity.types))?;
        write!(f, "**Generation:** {}", entity.generation)?;
        if let Some(category) = &entity.category {
            write!(f, "\n**Category:** {}", category)?;
        }

        f.write_str("\n\n")?;
        write_stats(f, &entity.stats)?;

        write!(f, "\n\n### Abilities\n**Normal:** {}", entity.abilities.normal.join(", "))?;
        if let Some(hidden) = &entity.abilities.hidden {
            write!(f, "\n**Hidden Ability:** {}", hidden)?;
        }

        if let Some(evolution) = &entity.evolution {
            write!(f, "\n\n### Evolution")?;
            if !evolution.chain.is_empty() {
                write!(f, "\n**Chain:** {}", evolution.chain.join(" → "))?;
            }
            if let Some(from) = &evolution.from {
                write!(f, "\n**Evolves from:** {}", from)?;
                if let Some(method) = &evolution.method {
                    write!(f, " ({})", method)?;
                }
            }
            if !evolution.to.is_empty() {
                write!(f, "\n**Evolves into:** {}", evolution.to.join(", "))?;
            }
        }

        if !entity.forms.is_empty() {
            write!(f, "\n\n### Alternate Forms")?;
            for form in &entity.forms {
                let view = entity.view(form);
                write!(f, "\n- **{}**: {}", view.name, format_types(&view.types))?;
                if let Some(ability) = form.abilities.as_ref().and_then(|a| a.preferred()) {
                    write!(f, ", {}", ability)?;
                }
                write!(f, " (BST {})", view.stats.total())?;
            }
        }

        f.write_str("\n\n")?;
        write_matchups(f, &self.chart.defensive_profile(&entity.types))?;

        if let Some(lore) = &entity.lore {
            write!(f, "\n\n### Pokédex Entry\n{}", lore)?;
        }

        let mut sep = "\n\n";
        if let Some(tier) = &entity.tier {
            write!(f, "{sep}**Competitive Tier:** {tier}")?;
            sep = "\n";
        }
        if entity.legendary {
            write!(f, "{sep}*This is a Legendary Pokémon*")?;
            sep = "\n";
        }
        if entity.mythical {
            write!(f, "{sep}*This is a Mythical Pokémon*")?;
        }
        Ok(())
    }
}

/// Defensive summary of a typing plus its super-effective attackers
#[derive(Debug, Clone, Copy)]
pub struct TypeSummary<'a> {
    profile: &'a DefensiveProfile,
}

pub fn type_summary(profile: &DefensiveProfile) -> TypeSummary<'_> {
    TypeSummary { profile }
}

impl fmt::Display for TypeSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;

        writeln!(f, "## Type Analysis: {}", format_types(&profile.types))?;
        if !profile.immunities.is_empty() {
            write!(f, "\n**Immunities:** {}", join_types(&profile.immunities))?;
        }
        if !profile.weaknesses.is_empty() {
            write!(f, "\n**Weaknesses:** {}", Multipliers(&profile.weaknesses))?;
        }
        if !profile.resistances.is_empty() {
            write!(f, "\n**Resistances:** {}", Multipliers(&profile.resistances))?;
        }

        write!(f, "\n\n**Best Attacking Types:** ")?;
        if profile.weaknesses.is_empty() {
            return f.write_str("None with super-effective damage");
        }
        let best: Vec<&str> = profile.weaknesses.iter().map(|w| w.ty.as_str()).collect();
        f.write_str(&best.join(", "))
    }
}

/// Best and worst attacking types against a typing, with recommendations
#[derive(Debug, Clone, PartialEq)]
pub struct CounterReport {
    pub types: TypeSet,

    /// Super-effective attackers, strongest first
    pub best: Vec<TypeMultiplier>,

    /// Immunities first, then resistances weakest first
    pub worst: Vec<TypeMultiplier>,
}

pub fn counter_report(chart: &TypeChart, types: &TypeSet) -> CounterReport {
    CounterReport {
        types: *types,
        best: chart.best_attackers(types),
        worst: chart.worst_attackers(types),
    }
}

impl fmt::Display for CounterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Counter Analysis: {}", format_types(&self.types))?;

        write!(f, "\n### Best Attacking Types (Super Effective)")?;
        if self.best.is_empty() {
            write!(f, "\nNo types deal super-effective damage")?;
        }
        for counter in &self.best {
            write!(
                f,
                "\n- **{}** ({} damage)",
                counter.ty.as_str().to_uppercase(),
                format_multiplier(counter.multiplier)
            )?;
        }

        write!(f, "\n\n### Types to Avoid (Resisted/Immune)")?;
        if self.worst.is_empty() {
            write!(f, "\nNo major resistances")?;
        }
        for bad in &self.worst {
            let desc = if bad.multiplier == 0.0 {
                "immune".to_string()
            } else {
                format_multiplier(bad.multiplier)
            };
            write!(f, "\n- **{}** ({})", bad.ty.as_str().to_uppercase(), desc)?;
        }

        write!(f, "\n\n### Battle Recommendations")?;
        match self.best.first() {
            Some(top) => write!(
                f,
                "\n- Lead with **{}** type moves for {} damage",
                top.ty.as_str().to_uppercase(),
                format_multiplier(top.multiplier)
            ),
            None => write!(f, "\n- No attacking type is super effective; rely on neutral coverage"),
        }
    }
}

/// A resolved alternate form next to its base entity
#[derive(Debug, Clone, Copy)]
pub struct FormCard<'a> {
    chart: &'a TypeChart,
    view: &'a FormView<'a>,
}

pub fn form_card<'a>(chart: &'a TypeChart, view: &'a FormView<'a>) -> FormCard<'a> {
    FormCard { chart, view }
}

impl fmt::Display for FormCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;

        writeln!(f, "## {}", view.name)?;
        writeln!(f, "**Original Type:** {}", format_types(&view.base.types))?;
        write!(f, "**Form Type:** {}", format_types(&view.types))?;

        write!(f, "\n\n### Abilities\n**Normal:** {}", view.abilities.normal.join(", "))?;
        if let Some(hidden) = &view.abilities.hidden {
            write!(f, "\n**Hidden Ability:** {}", hidden)?;
        }

        f.write_str("\n\n")?;
        write_stats(f, &view.stats)?;
        let changes = view.stat_changes();
        if !changes.is_zero() {
            let listed: Vec<String> = changes
                .changed()
                .map(|(stat, delta)| format!("{} {:+}", stat, delta))
                .collect();
            write!(f, "\n**Changes from {}:** {}", view.base.name, listed.join(", "))?;
        }

        f.write_str("\n\n")?;
        write_matchups(f, &self.chart.defensive_profile(&view.types))?;

        if let Some(note) = &view.form.evolution_note {
            write!(f, "\n\n**Evolution Note:** {}", note)?;
        }
        if let Some(lore) = &view.form.lore {
            write!(f, "\n\n### Pokédex Entry\n{}", lore)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rotom_dex::{KnowledgeBase, Region};

    use super::*;

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(4.0), "4x");
        assert_eq!(format_multiplier(0.25), "0.25x");
        assert_eq!(format_multiplier(0.0), "0x");
    }

    #[test]
    fn test_format_types() {
        let types = TypeSet::dual(Type::Water, Type::Ground).unwrap();
        assert_eq!(format_types(&types), "WATER/GROUND");
    }

    #[test]
    fn test_type_summary() {
        let types = TypeSet::dual(Type::Water, Type::Ground).unwrap();
        let profile = TypeChart::standard().defensive_profile(&types);
        let text = type_summary(&profile).to_string();
        assert!(text.starts_with("## Type Analysis: WATER/GROUND\n\n**Immunities:** Electric"));
        assert!(text.contains("**Weaknesses:** Grass (4x)"));
        assert!(text.ends_with("\n\n**Best Attacking Types:** Grass"));
    }

    #[test]
    fn test_type_summary_without_weaknesses() {
        let profile = TypeChart::neutral().defensive_profile(&TypeSet::single(Type::Normal));
        assert!(type_summary(&profile)
            .to_string()
            .ends_with("**Best Attacking Types:** None with super-effective damage"));
    }

    #[test]
    fn test_counter_report() {
        let types = TypeSet::single(Type::Normal);
        let report = counter_report(TypeChart::standard(), &types);
        assert_eq!(report.best[0].ty, Type::Fighting);
        assert_eq!(report.worst[0].ty, Type::Ghost);

        let text = report.to_string();
        assert!(text.starts_with("## Counter Analysis: NORMAL\n\n### Best Attacking Types"));
        assert!(text.contains("- **FIGHTING** (2x damage)"));
        assert!(text.contains("- **GHOST** (immune)"));
        assert!(text.ends_with("Lead with **FIGHTING** type moves for 2x damage"));
    }

    #[test]
    fn test_entity_card() {
        let kb = KnowledgeBase::bundled().unwrap();
        let text = entity_card(&kb.chart, kb.registry.find("Charizard").unwrap()).to_string();
        assert!(text.starts_with("## Charizard (#6)\n**Type:** FIRE/FLYING"));
        assert!(text.contains("\n\n### Base Stats\n- HP: 78"));
        assert!(text.contains("- Sp. Atk: 109"));
        assert!(text.contains("- **Total:** 534"));
        assert!(text.contains("**Chain:** Charmander → Charmeleon → Charizard"));
        assert!(text.contains("**Evolves from:** Charmeleon (Level 36)"));
        assert!(text.contains("- **Mega Charizard X**: FIRE/DRAGON, Tough Claws (BST 634)"));
        assert!(text.contains("**Weaknesses:** Rock (4x), Water (2x), Electric (2x)"));
        assert!(text.contains("**Immunities:** Ground"));
        assert!(text.ends_with("\n\n**Competitive Tier:** UU"));
    }

    #[test]
    fn test_form_card() {
        let kb = KnowledgeBase::bundled().unwrap();
        let view = kb.registry.regional_form("Ninetales", Region::Alola).unwrap();
        let text = form_card(&kb.chart, &view).to_string();
        assert!(text.starts_with("## Alolan Ninetales"));
        assert!(text.contains("**Original Type:** FIRE"));
        assert!(text.contains("**Form Type:** ICE/FAIRY"));
        assert!(text.contains("**Changes from Ninetales:** Attack -9, Speed +9"));
        assert!(text.contains("**Immunities:** Dragon"));
        assert!(text.contains("**Evolution Note:**"));
        assert!(!text.ends_with('\n'));
    }
}
