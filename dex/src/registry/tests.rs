use rotom_chart::Type;

use crate::form::{FormKind, Region};
use crate::loader::KnowledgeBase;
use crate::stats::Stat;

use super::*;

fn registry() -> Registry {
    KnowledgeBase::bundled().unwrap().registry
}

#[test]
fn test_find_ignores_punctuation_and_case() {
    let registry = registry();
    let a = registry.find("Mr. Mime").unwrap();
    let b = registry.find("mr-mime").unwrap();
    let c = registry.find("MRMIME").unwrap();
    assert_eq!(a.id, 122);
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(b, c));
}

#[test]
fn test_find_miss() {
    let registry = registry();
    assert!(registry.find("Missingno").is_none());
    assert!(registry.find("").is_none());
    assert!(registry.find("...").is_none());
}

#[test]
fn test_punctuation_only_name_is_not_indexed() {
    let json = r#"{"pokemon": [
        {"id": 1, "key": "glitch", "name": "?!", "types": ["normal"], "generation": 1,
         "stats": {"hp": 33, "attack": 136, "defense": 0, "spAtk": 6, "spDef": 6, "speed": 29}}
    ]}"#;
    let registry = KnowledgeBase::from_json(json).unwrap().registry;
    assert_eq!(registry.find("Glitch").map(|e| e.name.as_str()), Some("?!"));
    assert!(registry.find("?!").is_none());
    assert!(registry.find("").is_none());
}

#[test]
fn test_by_type_requires_every_type() {
    let registry = registry();

    let water_ground: Vec<&str> = registry
        .by_type(&[Type::Water, Type::Ground])
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(water_ground, vec!["Wooper", "Quagsire", "Swampert"]);

    let steel = registry.by_type(&[Type::Steel]);
    assert!(steel.iter().all(|e| e.types.contains(Type::Steel)));
    assert!(steel.iter().any(|e| e.name == "Scizor"));

    assert_eq!(registry.by_type(&[]).len(), registry.len());
}

#[test]
fn test_by_generation_and_legends() {
    let registry = registry();
    let gen4: Vec<&str> = registry.by_generation(4).iter().map(|e| e.name.as_str()).collect();
    assert_eq!(gen4, vec!["Garchomp", "Lucario", "Togekiss", "Rotom"]);
    assert!(registry.by_generation(42).is_empty());

    let legends: Vec<&str> = registry
        .legendary_and_mythical()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(legends, vec!["Zapdos", "Mewtwo", "Mew", "Lugia", "Celebi"]);
}

#[test]
fn test_mega_forms() {
    let registry = registry();
    assert!(registry.with_mega_forms().iter().all(|e| e.has_mega()));

    let megas = registry.mega_forms("charizard");
    assert_eq!(megas.len(), 2);
    assert_eq!(megas[0].name, "Mega Charizard X");
    assert_eq!(megas[0].types.to_vec(), vec![Type::Fire, Type::Dragon]);
    assert!(megas[0].type_changed());
    assert!(!megas[1].type_changed());
    assert_eq!(megas[1].stats.special_attack, 159);
    assert_eq!(megas[1].total_change(), 100);
    assert_eq!(megas[1].abilities.preferred(), Some("Drought"));

    assert!(registry.mega_forms("Pikachu").is_empty());
    assert!(registry.mega_forms("nobody").is_empty());
}

#[test]
fn test_regional_forms() {
    let registry = registry();

    let mime = registry.regional_form("Mr. Mime", Region::Galar).unwrap();
    assert_eq!(mime.name, "Galarian Mr. Mime");
    assert_eq!(mime.types.to_vec(), vec![Type::Ice, Type::Psychic]);
    assert_eq!(mime.stat_changes().get(Stat::SpecialDefense), -30);
    assert_eq!(mime.form.kind, FormKind::Regional(Region::Galar));
    assert!(mime.form.evolution_note.is_some());

    assert!(registry.regional_form("Mr. Mime", Region::Alola).is_none());

    // Without a stat override the base stats carry over
    let vulpix = registry.regional_form("vulpix", Region::Alola).unwrap();
    assert_eq!(vulpix.stats, vulpix.base.stats);
    assert!(vulpix.stat_changes().is_zero());

    let growlithe = registry.regional_forms("Growlithe");
    assert_eq!(growlithe.len(), 1);
    assert_eq!(growlithe[0].form.region(), Some(Region::Hisui));
    assert!(registry.regional_forms("Garchomp").is_empty());
}

#[test]
fn test_form_stat_deltas() {
    let registry = registry();
    let rotom = registry.find("Rotom").unwrap();
    let heat = rotom.forms.iter().find(|f| f.name == "Heat Rotom").unwrap();
    let view = rotom.view(heat);
    assert_eq!(view.stats.defense, 107);
    assert_eq!(view.stats.speed, 86);
    assert_eq!(view.stats.total(), 520);
}

#[test]
fn test_evolution_chain() {
    let registry = registry();
    let chain = registry.evolution_chain("charmeleon").unwrap();
    assert_eq!(chain, ["Charmander", "Charmeleon", "Charizard"]);

    let charizard = registry.find("Charizard").unwrap();
    let link = charizard.evolution.as_ref().unwrap();
    assert_eq!(link.from.as_deref(), Some("Charmeleon"));
    assert_eq!(link.method.as_deref(), Some("Level 36"));
    assert!(link.to.is_empty());
    assert_eq!(link.stage_of("Charizard"), Some(3));

    assert!(registry.evolution_chain("Mewtwo").is_none());
    assert!(registry.evolution_chain("unknown").is_none());
}

#[test]
fn test_names_follow_insertion_order() {
    let registry = registry();
    let names: Vec<&str> = registry.names().take(3).collect();
    assert_eq!(names, vec!["Bulbasaur", "Ivysaur", "Venusaur"]);
    assert_eq!(registry.names().count(), registry.len());
}

#[test]
fn test_generations() {
    let registry = registry();
    assert_eq!(registry.generations().len(), 9);
    let kanto = registry.generation(1).unwrap();
    assert_eq!(kanto.region, "Kanto");
    assert_eq!(kanto.count, 151);
    assert!(registry.generation(10).is_none());
}

#[test]
fn test_ability_lookup() {
    let registry = registry();
    let sand = registry.ability("sand_stream").unwrap();
    assert_eq!(sand.name, "Sand Stream");
    assert_eq!(sand.category, AbilityCategory::Weather);
    assert!(registry.ability("Sand Stream").is_some());
    assert!(registry.ability("Wonder Guard").is_none());
}

#[test]
fn test_team_synergy() {
    let registry = registry();
    let synergy = registry.team_synergy(&["Drizzle", "swift swim", "Regenerator", "Intimidate"]);
    assert_eq!(synergy.weather_setter.as_deref(), Some("Drizzle"));
    assert_eq!(synergy.terrain_setter, None);
    assert_eq!(synergy.ability_combos, vec!["Drizzle + swift swim"]);
    assert_eq!(synergy.recommendations.len(), 2);
    assert!(synergy.recommendations[0].starts_with("Rain Team: "));
    assert!(synergy.recommendations[1].starts_with("Pivot Core: "));

    let lonely = registry.team_synergy(&["Drought"]);
    assert_eq!(lonely.weather_setter.as_deref(), Some("Drought"));
    assert!(lonely.ability_combos.is_empty());
    assert!(lonely.recommendations.is_empty());

    assert_eq!(registry.team_synergy(&[]), TeamSynergy::default());
}

#[test]
fn test_priority_moves_sorted() {
    let registry = registry();
    let moves = registry.priority_moves();
    assert_eq!(moves[0].name, "Protect");
    assert!(moves.windows(2).all(|w| w[0].priority >= w[1].priority));

    let water: Vec<&str> = registry
        .priority_moves_by_type(Type::Water)
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(water, vec!["Aqua Jet", "Jet Punch"]);
    assert!(registry.priority_moves_by_type(Type::Fairy).is_empty());
}

#[test]
fn test_speed_control() {
    let registry = registry();
    let trick_room = registry
        .speed_control()
        .iter()
        .find(|s| s.name == "Trick Room")
        .unwrap();
    assert_eq!(trick_room.priority, -7);
}
