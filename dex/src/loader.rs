//! Knowledge-base loading
//!
//! The JSON document is read into loose `Raw*` records first. Field aliases
//! and the several historical spellings of alternate forms are folded into
//! one [`Entity`] shape here, so nothing downstream ever sees them.

use std::collections::BTreeMap;
use std::path::Path;

use rotom_chart::{Type, TypeChart, TypeSet};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::ability::{AbilityCombo, AbilityInfo, AbilitySet};
use crate::entity::{Entity, EvolutionLink};
use crate::error::LoadError;
use crate::form::{AlternateForm, FormKind, Region, StatOverride};
use crate::generation::GenerationInfo;
use crate::moves::{PriorityMove, SpeedControl};
use crate::normalize::normalize_name;
use crate::registry::{Catalogue, Registry};
use crate::stats::{StatBlock, StatDeltas};

const BUNDLED: &str = include_str!("../data/pokedex.json");

/// A loaded type chart plus registry
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub chart: TypeChart,
    pub registry: Registry,
}

impl KnowledgeBase {
    /// The knowledge base shipped with the crate
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        raw.build()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    pokemon: Vec<RawEntity>,
    #[serde(default)]
    abilities: Vec<AbilityInfo>,
    #[serde(default)]
    combo_synergies: Vec<AbilityCombo>,
    #[serde(default)]
    priority_moves: Vec<PriorityMove>,
    #[serde(default)]
    speed_control: Vec<SpeedControl>,
    #[serde(default)]
    generations: Vec<GenerationInfo>,

    /// attacker -> defender -> multiplier, listing every non-neutral cell
    #[serde(default)]
    type_chart: Option<BTreeMap<String, BTreeMap<String, f32>>>,
}

impl RawDocument {
    fn build(self) -> Result<KnowledgeBase, LoadError> {
        let chart = match self.type_chart {
            Some(sparse) => build_chart(sparse)?,
            None => TypeChart::standard().clone(),
        };

        let entities = self
            .pokemon
            .into_iter()
            .map(RawEntity::into_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let catalogue = Catalogue {
            abilities: self.abilities,
            combos: self.combo_synergies,
            priority_moves: self.priority_moves,
            speed_control: self.speed_control,
            generations: self.generations,
        };
        let ability_count = catalogue.abilities.len();
        let move_count = catalogue.priority_moves.len();

        let registry = Registry::new(entities)?.with_catalogue(catalogue);
        debug!(
            entities = registry.len(),
            abilities = ability_count,
            priority_moves = move_count,
            "Loaded knowledge base"
        );

        Ok(KnowledgeBase { chart, registry })
    }
}

fn build_chart(sparse: BTreeMap<String, BTreeMap<String, f32>>) -> Result<TypeChart, LoadError> {
    let mut entries = Vec::new();
    for (attacker, row) in sparse {
        let attacker: Type = attacker.parse().map_err(LoadError::ChartType)?;
        for (defender, multiplier) in row {
            let defender: Type = defender.parse().map_err(LoadError::ChartType)?;
            entries.push((attacker, defender, multiplier));
        }
    }
    Ok(TypeChart::from_entries(entries)?)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStats {
    hp: u16,
    attack: u16,
    defense: u16,
    #[serde(alias = "spAtk", alias = "spa")]
    special_attack: u16,
    #[serde(alias = "spDef", alias = "spd")]
    special_defense: u16,
    speed: u16,
    #[serde(default)]
    total: Option<u32>,
}

impl RawStats {
    fn into_block(self, owner: &str) -> StatBlock {
        let block = StatBlock::new(
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        );
        if let Some(declared) = self.total {
            if declared != block.total() {
                warn!(
                    entity = owner,
                    declared,
                    computed = block.total(),
                    "Declared stat total disagrees with stats; using computed total"
                );
            }
        }
        block
    }
}

#[derive(Deserialize)]
struct RawStep {
    pokemon: String,
    #[serde(default)]
    method: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Deserialize)]
struct RawEvolution {
    #[serde(default)]
    chain: Vec<String>,
    #[serde(default)]
    previous: Option<RawStep>,
    #[serde(default)]
    next: Option<OneOrMany<RawStep>>,
}

impl From<RawEvolution> for EvolutionLink {
    fn from(raw: RawEvolution) -> Self {
        let (from, method) = match raw.previous {
            Some(step) => (Some(step.pokemon), step.method),
            None => (None, None),
        };
        let to = raw
            .next
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(|step| step.pokemon)
            .collect();
        EvolutionLink {
            from,
            to,
            method,
            chain: raw.chain,
        }
    }
}

#[derive(Deserialize)]
struct RawMega {
    name: String,
    types: Vec<String>,
    #[serde(default)]
    ability: Option<String>,
    stats: RawStats,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawForm {
    name: String,
    #[serde(default)]
    gigantamax: bool,
    #[serde(default)]
    types: Option<Vec<String>>,
    #[serde(default)]
    ability: Option<String>,
    #[serde(default)]
    abilities: Option<AbilitySet>,
    #[serde(default)]
    stats: Option<RawStats>,
    #[serde(default)]
    stat_changes: Option<StatDeltas>,
    #[serde(default)]
    lore: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegional {
    region: String,
    #[serde(default)]
    name: Option<String>,
    types: Vec<String>,
    #[serde(default)]
    abilities: Option<AbilitySet>,
    #[serde(default)]
    stats: Option<RawStats>,
    #[serde(default)]
    lore: Option<String>,
    #[serde(default)]
    evolution_note: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntity {
    id: u16,
    #[serde(default)]
    key: Option<String>,
    name: String,
    types: Vec<String>,
    generation: u8,
    stats: RawStats,
    #[serde(default)]
    abilities: AbilitySet,
    #[serde(default)]
    evolution: Option<RawEvolution>,
    #[serde(default)]
    mega_evolution: Option<RawMega>,
    #[serde(default)]
    mega_evolutions: Vec<RawMega>,
    #[serde(default)]
    forms: Vec<RawForm>,
    #[serde(default)]
    special_forms: Vec<RawForm>,
    #[serde(default)]
    regional_forms: Vec<RawRegional>,
    #[serde(default, alias = "competitiveTier")]
    tier: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    lore: Option<String>,
    #[serde(default, alias = "isLegendary")]
    legendary: bool,
    #[serde(default, alias = "isMythical")]
    mythical: bool,
}

impl RawEntity {
    fn into_entity(self) -> Result<Entity, LoadError> {
        let name = self.name;
        let typing = |types: &[String], owner: &str| {
            TypeSet::from_names(types).map_err(|source| LoadError::Typing {
                entity: owner.to_string(),
                source,
            })
        };

        let types = typing(&self.types, &name)?;
        let stats = self.stats.into_block(&name);

        let mut forms = Vec::new();
        for mega in self.mega_evolution.into_iter().chain(self.mega_evolutions) {
            forms.push(AlternateForm {
                types: Some(typing(&mega.types, &mega.name)?),
                stats: Some(StatOverride::Full(mega.stats.into_block(&mega.name))),
                abilities: mega.ability.map(AbilitySet::only),
                name: mega.name,
                kind: FormKind::Mega,
                lore: None,
                evolution_note: None,
            });
        }

        for regional in self.regional_forms {
            let region: Region =
                regional
                    .region
                    .parse()
                    .map_err(|region| LoadError::UnknownRegion {
                        entity: name.clone(),
                        region,
                    })?;
            let form_name = regional
                .name
                .unwrap_or_else(|| format!("{} {}", region.adjective(), name));
            forms.push(AlternateForm {
                types: Some(typing(&regional.types, &form_name)?),
                stats: regional
                    .stats
                    .map(|s| StatOverride::Full(s.into_block(&form_name))),
                abilities: regional.abilities,
                kind: FormKind::Regional(region),
                lore: regional.lore,
                evolution_note: regional.evolution_note,
                name: form_name,
            });
        }

        for form in self.forms.into_iter().chain(self.special_forms) {
            let types = match &form.types {
                Some(list) => Some(typing(list, &form.name)?),
                None => None,
            };
            let stats = match (form.stats, form.stat_changes) {
                (Some(full), _) => Some(StatOverride::Full(full.into_block(&form.name))),
                (None, Some(deltas)) => Some(StatOverride::Deltas(deltas)),
                (None, None) => None,
            };
            let abilities = form.abilities.or_else(|| form.ability.map(AbilitySet::only));
            forms.push(AlternateForm {
                kind: if form.gigantamax {
                    FormKind::Gigantamax
                } else {
                    FormKind::Special
                },
                name: form.name,
                types,
                stats,
                abilities,
                lore: form.lore,
                evolution_note: None,
            });
        }

        Ok(Entity {
            id: self.id,
            key: self.key.unwrap_or_else(|| normalize_name(&name)),
            name,
            types,
            stats,
            abilities: self.abilities,
            evolution: self.evolution.map(EvolutionLink::from),
            forms,
            generation: self.generation,
            tier: self.tier,
            role: self.role,
            category: self.category,
            lore: self.lore,
            legendary: self.legendary,
            mythical: self.mythical,
        })
    }
}
