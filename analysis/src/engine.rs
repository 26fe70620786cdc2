use rotom_chart::{analyze_matchup, TypeChart};
use rotom_dex::{KnowledgeBase, Registry};
use tracing::debug;

use crate::compare::compare;
use crate::config::RoleThresholds;
use crate::format::counter_report;
use crate::query::{Answer, NotFound, Query};
use crate::strategy::strategy_summary;

/// Answers [`Query`] values against one loaded knowledge base
///
/// Holds only shared references, so one engine can serve many threads.
#[derive(Debug, Clone)]
pub struct Engine<'a> {
    chart: &'a TypeChart,
    registry: &'a Registry,
    thresholds: RoleThresholds,
}

impl<'a> Engine<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self::from_parts(&kb.chart, &kb.registry)
    }

    pub fn from_parts(chart: &'a TypeChart, registry: &'a Registry) -> Self {
        Self {
            chart,
            registry,
            thresholds: RoleThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: RoleThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn chart(&self) -> &'a TypeChart {
        self.chart
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn thresholds(&self) -> &RoleThresholds {
        &self.thresholds
    }

    /// Answer a query; absent names come back as [`Answer::NotFound`] or
    /// [`Answer::Unresolved`], never as a panic
    pub fn answer(&self, query: &Query) -> Answer<'a> {
        debug!(?query, "Answering query");
        let chart = self.chart;
        let registry = self.registry;

        match query {
            Query::TypeMatchup { attacker, defenders } => {
                Answer::TypeMatchup(analyze_matchup(chart, *attacker, defenders))
            }
            Query::DefensiveProfile(types) => Answer::DefensiveProfile(chart.defensive_profile(types)),
            Query::Counters(types) => Answer::Counters(counter_report(chart, types)),
            Query::Ability(name) => match registry.ability(name) {
                Some(info) => Answer::Ability(info),
                None => Answer::NotFound(NotFound::Ability(name.clone())),
            },
            Query::PriorityMoves(ty) => Answer::PriorityMoves {
                ty: *ty,
                moves: match ty {
                    Some(ty) => registry.priority_moves_by_type(*ty),
                    None => registry.priority_moves().iter().collect(),
                },
            },
            Query::SpeedControl => Answer::SpeedControl(registry.speed_control()),
            Query::TeamSynergy(abilities) => {
                let team: Vec<&str> = abilities.iter().map(String::as_str).collect();
                Answer::TeamSynergy(registry.team_synergy(&team))
            }
            Query::EntityInfo(name) => match registry.find(name) {
                Some(entity) => Answer::EntityInfo { entity, chart },
                None => Answer::NotFound(NotFound::Entity(name.clone())),
            },
            Query::RegionalForm { name, region } => {
                let Some(entity) = registry.find(name) else {
                    return Answer::NotFound(NotFound::Entity(name.clone()));
                };
                let forms = match region {
                    Some(region) => registry.regional_form(name, *region).into_iter().collect(),
                    None => registry.regional_forms(name),
                };
                if forms.is_empty() {
                    Answer::NotFound(NotFound::RegionalForm {
                        name: entity.name.clone(),
                        region: *region,
                    })
                } else {
                    Answer::Forms { forms, chart }
                }
            }
            Query::MegaForms(None) => Answer::MegaHolders(registry.with_mega_forms()),
            Query::MegaForms(Some(name)) => {
                let Some(entity) = registry.find(name) else {
                    return Answer::NotFound(NotFound::Entity(name.clone()));
                };
                let forms = registry.mega_forms(name);
                if forms.is_empty() {
                    Answer::NotFound(NotFound::MegaForm(entity.name.clone()))
                } else {
                    Answer::Forms { forms, chart }
                }
            }
            Query::EvolutionChain(name) => {
                let Some(entity) = registry.find(name) else {
                    return Answer::NotFound(NotFound::Entity(name.clone()));
                };
                let chain: Vec<&str> = match registry.evolution_chain(name) {
                    Some(chain) => chain.iter().map(String::as_str).collect(),
                    None => vec![entity.name.as_str()],
                };
                let stage = entity
                    .evolution
                    .as_ref()
                    .and_then(|link| link.stage_of(&entity.name))
                    .unwrap_or(1);
                Answer::EvolutionChain {
                    entity,
                    chain,
                    stage,
                }
            }
            Query::Compare { left, right } => match compare(chart, registry, left, right) {
                Ok(comparison) => Answer::Comparison(comparison),
                Err(unresolved) => Answer::Unresolved(unresolved),
            },
            Query::Generation(Some(number)) => match registry.generation(*number) {
                Some(info) => Answer::Generation {
                    info,
                    entities: registry.by_generation(*number),
                },
                None => Answer::NotFound(NotFound::Generation(*number)),
            },
            Query::Generation(None) => Answer::Generations(registry.generations()),
            Query::Legendaries => Answer::Legendaries(registry.legendary_and_mythical()),
            Query::ByType(types) => Answer::ByType {
                types: types.clone(),
                entities: registry.by_type(types),
            },
            Query::Strategy(name) => match registry.find(name) {
                Some(entity) => {
                    Answer::Strategy(strategy_summary(chart, registry, entity, &self.thresholds))
                }
                None => Answer::NotFound(NotFound::Entity(name.clone())),
            },
        }
    }
}
