//! Read-only entity registry and strategic catalogue

use std::collections::HashMap;

use rotom_chart::Type;
use tracing::trace;

use crate::ability::{AbilityCategory, AbilityCombo, AbilityInfo, TeamSynergy};
use crate::entity::Entity;
use crate::error::LoadError;
use crate::form::{FormView, Region};
use crate::generation::GenerationInfo;
use crate::moves::{PriorityMove, SpeedControl};
use crate::normalize::normalize_name;

/// Ability, move and generation reference data kept beside the roster
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub abilities: Vec<AbilityInfo>,
    pub combos: Vec<AbilityCombo>,
    pub priority_moves: Vec<PriorityMove>,
    pub speed_control: Vec<SpeedControl>,
    pub generations: Vec<GenerationInfo>,
}

/// All entities, indexed by normalized key and normalized display name.
///
/// Iteration and every multi-entity query return entities in insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
    abilities: Vec<AbilityInfo>,
    ability_index: HashMap<String, usize>,
    combos: Vec<AbilityCombo>,
    priority_moves: Vec<PriorityMove>,
    speed_control: Vec<SpeedControl>,
    generations: Vec<GenerationInfo>,
}

impl Registry {
    /// Build a registry, rejecting keys that collide after normalization
    pub fn new(entities: Vec<Entity>) -> Result<Self, LoadError> {
        let mut index = HashMap::with_capacity(entities.len() * 2);

        for (position, entity) in entities.iter().enumerate() {
            let key = normalize_name(&entity.key);
            if key.is_empty() {
                return Err(LoadError::EmptyKey(entity.key.clone()));
            }
            if index.insert(key.clone(), position).is_some() {
                return Err(LoadError::Duplicate(key));
            }
        }

        // Display names are a second way in, but never shadow a real key
        for (position, entity) in entities.iter().enumerate() {
            let by_name = normalize_name(&entity.name);
            if by_name.is_empty() {
                continue;
            }
            match index.get(&by_name) {
                Some(&existing) if existing != position => {
                    return Err(LoadError::Duplicate(by_name));
                }
                Some(_) => {}
                None => {
                    index.insert(by_name, position);
                }
            }
        }

        Ok(Self {
            entities,
            index,
            ..Self::default()
        })
    }

    /// Attach the ability and move catalogue
    pub fn with_catalogue(mut self, catalogue: Catalogue) -> Self {
        self.ability_index = catalogue
            .abilities
            .iter()
            .enumerate()
            .map(|(i, info)| (normalize_name(&info.name), i))
            .collect();
        self.abilities = catalogue.abilities;
        self.combos = catalogue.combos;

        let mut moves = catalogue.priority_moves;
        moves.sort_by(|a, b| b.priority.cmp(&a.priority));
        self.priority_moves = moves;

        self.speed_control = catalogue.speed_control;
        self.generations = catalogue.generations;
        self
    }

    /// Look up an entity by name; punctuation, spacing and case are ignored
    pub fn find(&self, name: &str) -> Option<&Entity> {
        let key = normalize_name(name);
        let found = self.index.get(&key).map(|&i| &self.entities[i]);
        if found.is_none() {
            trace!(name, key = %key, "No entity matches name");
        }
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Display names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }

    /// Entities carrying every one of `types`
    pub fn by_type(&self, types: &[Type]) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| types.iter().all(|t| e.types.contains(*t)))
            .collect()
    }

    pub fn by_generation(&self, generation: u8) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| e.generation == generation)
            .collect()
    }

    pub fn legendary_and_mythical(&self) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| e.legendary || e.mythical)
            .collect()
    }

    pub fn with_mega_forms(&self) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.has_mega()).collect()
    }

    pub fn regional_form(&self, name: &str, region: Region) -> Option<FormView<'_>> {
        let entity = self.find(name)?;
        entity
            .regional_form(region)
            .map(|form| FormView::resolve(entity, form))
    }

    /// Every regional variant of `name`; empty when unknown or when it has none
    pub fn regional_forms(&self, name: &str) -> Vec<FormView<'_>> {
        let Some(entity) = self.find(name) else {
            return Vec::new();
        };
        entity
            .forms
            .iter()
            .filter(|f| f.region().is_some())
            .map(|form| FormView::resolve(entity, form))
            .collect()
    }

    pub fn mega_forms(&self, name: &str) -> Vec<FormView<'_>> {
        let Some(entity) = self.find(name) else {
            return Vec::new();
        };
        entity
            .mega_forms()
            .map(|form| FormView::resolve(entity, form))
            .collect()
    }

    /// Full evolution line containing `name`
    pub fn evolution_chain(&self, name: &str) -> Option<&[String]> {
        self.find(name)?
            .evolution
            .as_ref()
            .map(|link| link.chain.as_slice())
            .filter(|chain| !chain.is_empty())
    }

    pub fn generation(&self, number: u8) -> Option<&GenerationInfo> {
        self.generations.iter().find(|g| g.number == number)
    }

    pub fn generations(&self) -> &[GenerationInfo] {
        &self.generations
    }

    /// Catalogue entry for an ability; same normalization as [`Registry::find`]
    pub fn ability(&self, name: &str) -> Option<&AbilityInfo> {
        let key = normalize_name(name);
        let found = self.ability_index.get(&key).map(|&i| &self.abilities[i]);
        if found.is_none() {
            trace!(name, key = %key, "No catalogue entry for ability");
        }
        found
    }

    pub fn abilities(&self) -> &[AbilityInfo] {
        &self.abilities
    }

    pub fn combos(&self) -> &[AbilityCombo] {
        &self.combos
    }

    /// Weather/terrain setters, setter partnerships and named combos present
    /// in a team's abilities
    pub fn team_synergy(&self, team: &[&str]) -> TeamSynergy {
        let team_keys: Vec<String> = team.iter().map(|a| normalize_name(a)).collect();
        let mut synergy = TeamSynergy::default();

        for ability in team {
            let Some(info) = self.ability(ability) else {
                continue;
            };
            let setter = match info.category {
                AbilityCategory::Weather => &mut synergy.weather_setter,
                AbilityCategory::Terrain => &mut synergy.terrain_setter,
                _ => continue,
            };
            *setter = Some(info.name.clone());

            let partners: Vec<&str> = team
                .iter()
                .filter(|other| {
                    let key = normalize_name(other);
                    info.synergies.iter().any(|s| normalize_name(s) == key)
                })
                .copied()
                .collect();
            if !partners.is_empty() {
                synergy
                    .ability_combos
                    .push(format!("{} + {}", ability, partners.join(", ")));
            }
        }

        for combo in &self.combos {
            let present = combo
                .abilities
                .iter()
                .filter(|a| team_keys.contains(&normalize_name(a)))
                .count();
            if present >= 2 {
                synergy
                    .recommendations
                    .push(format!("{}: {}", combo.name, combo.strategy));
            }
        }

        synergy
    }

    /// Priority moves, highest priority first
    pub fn priority_moves(&self) -> &[PriorityMove] {
        &self.priority_moves
    }

    pub fn priority_moves_by_type(&self, ty: Type) -> Vec<&PriorityMove> {
        self.priority_moves.iter().filter(|m| m.ty == ty).collect()
    }

    pub fn speed_control(&self) -> &[SpeedControl] {
        &self.speed_control
    }
}

#[cfg(test)]
mod tests;
