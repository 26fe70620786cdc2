//! Entity records

use rotom_chart::TypeSet;
use serde::Serialize;

use crate::ability::AbilitySet;
use crate::form::{AlternateForm, FormKind, FormView, Region};
use crate::stats::StatBlock;

/// Where an entity sits in its evolution line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvolutionLink {
    /// Predecessor, if any
    pub from: Option<String>,

    /// Successors (branching lines have several)
    pub to: Vec<String>,

    /// How this entity is reached from `from` ("Level 36", "Thunder Stone")
    pub method: Option<String>,

    /// The whole line in order, this entity included
    pub chain: Vec<String>,
}

impl EvolutionLink {
    /// 1-based position of `name` in the chain
    pub fn stage_of(&self, name: &str) -> Option<usize> {
        self.chain.iter().position(|n| n == name).map(|i| i + 1)
    }
}

/// A creature in the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// National dex number
    pub id: u16,

    /// Normalized lookup key ("mrmime")
    pub key: String,

    /// Canonical display name ("Mr. Mime")
    pub name: String,

    pub types: TypeSet,
    pub stats: StatBlock,
    pub abilities: AbilitySet,
    pub evolution: Option<EvolutionLink>,
    pub forms: Vec<AlternateForm>,
    pub generation: u8,

    /// Competitive tier label (OU, UU, Uber...)
    pub tier: Option<String>,

    /// Curated role label used when stats alone don't decide one
    pub role: Option<String>,

    pub category: Option<String>,
    pub lore: Option<String>,
    pub legendary: bool,
    pub mythical: bool,
}

impl Entity {
    pub fn mega_forms(&self) -> impl Iterator<Item = &AlternateForm> {
        self.forms.iter().filter(|f| f.is_mega())
    }

    pub fn has_mega(&self) -> bool {
        self.mega_forms().next().is_some()
    }

    pub fn regional_form(&self, region: Region) -> Option<&AlternateForm> {
        self.forms
            .iter()
            .find(|f| f.kind == FormKind::Regional(region))
    }

    pub fn has_gigantamax(&self) -> bool {
        self.forms.iter().any(|f| f.kind == FormKind::Gigantamax)
    }

    /// Resolve one of this entity's forms
    pub fn view<'a>(&'a self, form: &'a AlternateForm) -> FormView<'a> {
        FormView::resolve(self, form)
    }

    /// Physical-leaning attacker
    pub fn is_physical(&self) -> bool {
        self.stats.attack > self.stats.special_attack
    }
}
