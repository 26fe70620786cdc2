//! Closed set of questions the engine answers, and their answers

use std::fmt;

use rotom_chart::{
    DefensiveProfile, MatchupAnalysis, Type, TypeChart, TypeError, TypeSet,
};
use rotom_dex::{
    AbilityInfo, Entity, FormView, GenerationInfo, PriorityMove, Region, SpeedControl,
    TeamSynergy,
};
use thiserror::Error;

use crate::compare::{Comparison, Unresolved};
use crate::format::{
    entity_card, form_card, format_multiplier, format_types, type_summary, CounterReport,
};
use crate::strategy::StrategySummary;

/// A question for the [`Engine`](crate::Engine)
///
/// Type arguments are already parsed, so malformed type text is rejected
/// when a query is built rather than when it is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    TypeMatchup { attacker: Type, defenders: TypeSet },
    DefensiveProfile(TypeSet),
    Counters(TypeSet),
    Ability(String),
    /// All priority moves, or only those of one type
    PriorityMoves(Option<Type>),
    SpeedControl,
    TeamSynergy(Vec<String>),
    EntityInfo(String),
    /// One region's variant, or every regional variant when `region` is `None`
    RegionalForm { name: String, region: Option<Region> },
    /// One entity's Mega forms, or every entity that has one when `None`
    MegaForms(Option<String>),
    EvolutionChain(String),
    Compare { left: String, right: String },
    /// One generation, or the overview of all of them
    Generation(Option<u8>),
    Legendaries,
    ByType(Vec<Type>),
    Strategy(String),
}

impl Query {
    pub fn type_matchup(attacker: &str, defenders: &str) -> Result<Self, TypeError> {
        Ok(Query::TypeMatchup {
            attacker: attacker.parse()?,
            defenders: defenders.parse()?,
        })
    }

    pub fn defensive_profile(types: &str) -> Result<Self, TypeError> {
        Ok(Query::DefensiveProfile(types.parse()?))
    }

    pub fn counters(types: &str) -> Result<Self, TypeError> {
        Ok(Query::Counters(types.parse()?))
    }

    pub fn priority_moves(ty: Option<&str>) -> Result<Self, TypeError> {
        Ok(Query::PriorityMoves(ty.map(str::parse::<Type>).transpose()?))
    }

    /// Any number of type names separated by '/', ',' or whitespace
    pub fn by_type(types: &str) -> Result<Self, TypeError> {
        let types = types
            .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse::<Type>)
            .collect::<Result<Vec<_>, _>>()?;
        if types.is_empty() {
            return Err(TypeError::Empty);
        }
        Ok(Query::ByType(types))
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Query::EntityInfo(name.into())
    }

    pub fn compare(left: impl Into<String>, right: impl Into<String>) -> Self {
        Query::Compare {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// What kind of thing could not be found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Entity,
    Ability,
    RegionalForm,
    MegaForm,
    Generation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("Pokémon \"{0}\" not found")]
    Entity(String),

    #[error("Ability \"{0}\" is not in the catalogue")]
    Ability(String),

    #[error("{name} has no {} form", region_label(.region))]
    RegionalForm {
        name: String,
        region: Option<Region>,
    },

    #[error("{0} has no Mega Evolution")]
    MegaForm(String),

    #[error("Generation {0} is not known")]
    Generation(u8),
}

impl NotFound {
    pub fn subject(&self) -> Subject {
        match self {
            NotFound::Entity(_) => Subject::Entity,
            NotFound::Ability(_) => Subject::Ability,
            NotFound::RegionalForm { .. } => Subject::RegionalForm,
            NotFound::MegaForm(_) => Subject::MegaForm,
            NotFound::Generation(_) => Subject::Generation,
        }
    }
}

/// Region shown in [`NotFound::RegionalForm`]; "regional" when unspecified
struct RegionLabel(Option<Region>);

fn region_label(region: &Option<Region>) -> RegionLabel {
    RegionLabel(*region)
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(region) => write!(f, "{}", region.adjective()),
            None => write!(f, "regional"),
        }
    }
}

/// The engine's reply to a [`Query`]
#[derive(Debug, Clone, PartialEq)]
pub enum Answer<'a> {
    TypeMatchup(MatchupAnalysis),
    DefensiveProfile(DefensiveProfile),
    Counters(CounterReport),
    Ability(&'a AbilityInfo),
    PriorityMoves {
        ty: Option<Type>,
        moves: Vec<&'a PriorityMove>,
    },
    SpeedControl(&'a [SpeedControl]),
    TeamSynergy(TeamSynergy),
    EntityInfo {
        entity: &'a Entity,
        chart: &'a TypeChart,
    },
    Forms {
        forms: Vec<FormView<'a>>,
        chart: &'a TypeChart,
    },
    MegaHolders(Vec<&'a Entity>),
    /// `stage` is 1-based; a one-entry chain means `entity` does not evolve
    EvolutionChain {
        entity: &'a Entity,
        chain: Vec<&'a str>,
        stage: usize,
    },
    Comparison(Comparison<'a>),
    Generation {
        info: &'a GenerationInfo,
        entities: Vec<&'a Entity>,
    },
    Generations(&'a [GenerationInfo]),
    Legendaries(Vec<&'a Entity>),
    ByType {
        types: Vec<Type>,
        entities: Vec<&'a Entity>,
    },
    Strategy(StrategySummary<'a>),
    NotFound(NotFound),
    Unresolved(Unresolved),
}

impl Answer<'_> {
    pub fn is_found(&self) -> bool {
        !matches!(self, Answer::NotFound(_) | Answer::Unresolved(_))
    }

    /// Display text for any answer
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn entity_line(entity: &Entity) -> String {
    format!(
        "- **{}** ({}) Gen {}, BST {}",
        entity.name,
        format_types(&entity.types),
        entity.generation,
        entity.stats.total()
    )
}

fn upper(ty: Type) -> String {
    ty.as_str().to_uppercase()
}

impl fmt::Display for Answer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::TypeMatchup(analysis) => {
                writeln!(
                    f,
                    "## {} vs {}",
                    upper(analysis.attacker),
                    format_types(&analysis.defenders)
                )?;
                writeln!(f, "**Damage:** {}", format_multiplier(analysis.multiplier))?;
                if let Some(effectiveness) = analysis.effectiveness {
                    writeln!(f, "**Effectiveness:** {}", effectiveness)?;
                }
                write!(f, "{}", analysis)
            }
            Answer::DefensiveProfile(profile) => write!(f, "{}", type_summary(profile)),
            Answer::Counters(report) => write!(f, "{}", report),
            Answer::Ability(info) => {
                writeln!(f, "## {} ({})", info.name, info.category)?;
                write!(f, "**Effect:** {}", info.effect)?;
                if !info.synergies.is_empty() {
                    write!(f, "\n**Synergizes with:** {}", info.synergies.join(", "))?;
                }
                if !info.enables.is_empty() {
                    write!(f, "\n**Enables:** {}", info.enables.join(", "))?;
                }
                if !info.prevents.is_empty() {
                    write!(f, "\n**Prevents:** {}", info.prevents.join(", "))?;
                }
                if let Some(best) = &info.best_for {
                    write!(f, "\n**Best for:** {}", best)?;
                }
                Ok(())
            }
            Answer::PriorityMoves { ty, moves } => {
                match ty {
                    Some(ty) => write!(f, "## {} Priority Moves", upper(*ty))?,
                    None => write!(f, "## Priority Moves")?,
                }
                if moves.is_empty() {
                    write!(f, "\nNone")?;
                }
                for mv in moves {
                    let power = mv.power.map(|p| format!(" ({} BP)", p)).unwrap_or_default();
                    write!(
                        f,
                        "\n- **{}**{} [{}/{}] {:+}: {}",
                        mv.name,
                        power,
                        upper(mv.ty),
                        mv.category,
                        mv.priority,
                        mv.effect.as_deref().unwrap_or("No effect")
                    )?;
                }
                Ok(())
            }
            Answer::SpeedControl(options) => {
                write!(f, "## Speed Control Options")?;
                for option in options.iter() {
                    write!(
                        f,
                        "\n- **{}** (priority {}): {}",
                        option.name, option.priority, option.effect
                    )?;
                }
                Ok(())
            }
            Answer::TeamSynergy(synergy) => {
                write!(f, "## Team Synergy")?;
                if let Some(weather) = &synergy.weather_setter {
                    write!(f, "\n**Weather:** {}", weather)?;
                }
                if let Some(terrain) = &synergy.terrain_setter {
                    write!(f, "\n**Terrain:** {}", terrain)?;
                }
                for combo in &synergy.ability_combos {
                    write!(f, "\n- {}", combo)?;
                }
                for rec in &synergy.recommendations {
                    write!(f, "\n- {}", rec)?;
                }
                if synergy == &TeamSynergy::default() {
                    write!(f, "\nNo notable ability synergy")?;
                }
                Ok(())
            }
            Answer::EntityInfo { entity, chart } => write!(f, "{}", entity_card(chart, entity)),
            Answer::Forms { forms, chart } => {
                for (i, view) in forms.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n\n")?;
                    }
                    write!(f, "{}", form_card(chart, view))?;
                }
                Ok(())
            }
            Answer::MegaHolders(entities) => {
                write!(f, "## Pokémon with Mega Evolutions")?;
                for entity in entities {
                    let megas: Vec<&str> = entity.mega_forms().map(|m| m.name.as_str()).collect();
                    write!(f, "\n- **{}**: {}", entity.name, megas.join(", "))?;
                }
                Ok(())
            }
            Answer::EvolutionChain { entity, chain, stage } => {
                write!(f, "## Evolution of {}\n{}", entity.name, chain.join(" → "))?;
                if chain.len() < 2 {
                    return write!(f, "\n{} does not evolve", entity.name);
                }
                write!(f, "\n**Stage:** {} of {}", stage, chain.len())?;
                if let Some(link) = &entity.evolution {
                    if let Some(from) = &link.from {
                        write!(f, "\n**Evolves from:** {}", from)?;
                        if let Some(method) = &link.method {
                            write!(f, " ({})", method)?;
                        }
                    }
                    if !link.to.is_empty() {
                        write!(f, "\n**Evolves into:** {}", link.to.join(", "))?;
                    }
                }
                Ok(())
            }
            Answer::Comparison(comparison) => write!(f, "{}", comparison),
            Answer::Generation { info, entities } => {
                writeln!(f, "## Generation {}: {}", info.number, info.region)?;
                writeln!(f, "**Games:** {}", info.games.join(", "))?;
                writeln!(f, "**Starters:** {}", info.starters.join(", "))?;
                write!(f, "**New Pokémon:** {}", info.count)?;
                for entity in entities {
                    write!(f, "\n{}", entity_line(entity))?;
                }
                Ok(())
            }
            Answer::Generations(all) => {
                write!(f, "## Generations")?;
                for info in all.iter() {
                    write!(
                        f,
                        "\n- **Gen {}** {} ({}): {} Pokémon",
                        info.number,
                        info.region,
                        info.games.join(", "),
                        info.count
                    )?;
                }
                Ok(())
            }
            Answer::Legendaries(entities) => {
                write!(f, "## Legendary and Mythical Pokémon")?;
                for entity in entities {
                    let tag = if entity.mythical { " *Mythical*" } else { "" };
                    write!(f, "\n{}{}", entity_line(entity), tag)?;
                }
                Ok(())
            }
            Answer::ByType { types, entities } => {
                let names: Vec<String> = types.iter().map(|t| upper(*t)).collect();
                write!(f, "## {} Pokémon", names.join("/"))?;
                if entities.is_empty() {
                    write!(f, "\nNone")?;
                }
                for entity in entities {
                    write!(f, "\n{}", entity_line(entity))?;
                }
                Ok(())
            }
            Answer::Strategy(summary) => write!(f, "{}", summary),
            Answer::NotFound(missing) => write!(f, "{}", missing),
            Answer::Unresolved(unresolved) => write!(f, "{}", unresolved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_reject_bad_types() {
        assert_eq!(
            Query::type_matchup("ice", "dragon/flying"),
            Ok(Query::TypeMatchup {
                attacker: Type::Ice,
                defenders: TypeSet::dual(Type::Dragon, Type::Flying).unwrap(),
            })
        );
        assert_eq!(
            Query::type_matchup("lava", "fire"),
            Err(TypeError::Unknown("lava".to_string()))
        );
        assert_eq!(Query::counters("fire/fire"), Err(TypeError::Duplicate(Type::Fire)));
        assert_eq!(Query::counters("fire water grass"), Err(TypeError::TooMany(3)));
        assert_eq!(Query::by_type(""), Err(TypeError::Empty));
        assert_eq!(
            Query::by_type("water, ground"),
            Ok(Query::ByType(vec![Type::Water, Type::Ground]))
        );
        assert_eq!(Query::priority_moves(None), Ok(Query::PriorityMoves(None)));
        assert!(Query::priority_moves(Some("sound")).is_err());
    }

    #[test]
    fn test_priority_sign() {
        use rotom_dex::MoveCategory;

        let avalanche = PriorityMove {
            name: "Avalanche".to_string(),
            ty: Type::Ice,
            category: MoveCategory::Physical,
            power: Some(60),
            priority: -4,
            effect: None,
        };
        let jet = PriorityMove {
            name: "Aqua Jet".to_string(),
            ty: Type::Water,
            category: MoveCategory::Physical,
            power: Some(40),
            priority: 1,
            effect: None,
        };
        let answer = Answer::PriorityMoves {
            ty: None,
            moves: vec![&jet, &avalanche],
        };
        let text = answer.render();
        assert!(text.contains("- **Aqua Jet** (40 BP) [WATER/Physical] +1: No effect"));
        assert!(text.contains("- **Avalanche** (60 BP) [ICE/Physical] -4: No effect"));
        assert!(!text.contains("+-"));
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            NotFound::Entity("Agumon".to_string()).to_string(),
            "Pokémon \"Agumon\" not found"
        );
        assert_eq!(NotFound::Generation(12).subject(), Subject::Generation);

        let answer = Answer::NotFound(NotFound::RegionalForm {
            name: "Garchomp".to_string(),
            region: Some(Region::Alola),
        });
        assert_eq!(answer.render(), "Garchomp has no Alolan form");
        assert!(!answer.is_found());

        let answer = Answer::NotFound(NotFound::RegionalForm {
            name: "Garchomp".to_string(),
            region: None,
        });
        assert_eq!(answer.render(), "Garchomp has no regional form");
    }
}
