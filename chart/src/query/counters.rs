//! Counter ranking

use super::profile::TypeMultiplier;
use crate::chart::TypeChart;
use crate::types::{Type, TypeSet};

impl TypeChart {
    /// Attacking types that hit `defenders` super effectively
    ///
    /// Highest multiplier first, ties in canonical type order. Callers
    /// usually take a prefix.
    pub fn best_attackers(&self, defenders: &TypeSet) -> Vec<TypeMultiplier> {
        self.defensive_profile(defenders).weaknesses
    }

    /// Attacking types to avoid against `defenders`
    ///
    /// Immunities first (0x), then resistances from lowest multiplier up.
    pub fn worst_attackers(&self, defenders: &TypeSet) -> Vec<TypeMultiplier> {
        let profile = self.defensive_profile(defenders);
        profile
            .immunities
            .into_iter()
            .map(|ty| TypeMultiplier::new(ty, 0.0))
            .chain(profile.resistances)
            .collect()
    }

    /// Every attacking type ranked by the damage it deals to `defenders`
    pub fn coverage(&self, defenders: &TypeSet) -> Vec<TypeMultiplier> {
        let mut ranked: Vec<TypeMultiplier> = Type::ALL
            .into_iter()
            .map(|attacker| TypeMultiplier::new(attacker, self.combined_multiplier(attacker, defenders)))
            .collect();
        ranked.sort_by(|a, b| b.multiplier.total_cmp(&a.multiplier));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_attackers_against_dragon_flying() {
        let chart = TypeChart::standard();
        let typing = TypeSet::dual(Type::Dragon, Type::Flying).unwrap();
        let best = chart.best_attackers(&typing);
        assert_eq!(best[0], TypeMultiplier::new(Type::Ice, 4.0));
        let rest: Vec<Type> = best[1..].iter().map(|c| c.ty).collect();
        assert_eq!(rest, vec![Type::Rock, Type::Dragon, Type::Fairy]);
    }

    #[test]
    fn test_worst_attackers_puts_immunities_first() {
        let chart = TypeChart::standard();
        let typing = TypeSet::dual(Type::Water, Type::Ground).unwrap();
        let worst = chart.worst_attackers(&typing);
        assert_eq!(worst[0], TypeMultiplier::new(Type::Electric, 0.0));
        assert!(worst[1..].iter().all(|c| c.multiplier == 0.5));
        assert_eq!(worst.len(), 5);
    }

    #[test]
    fn test_worst_attackers_are_ascending() {
        let chart = TypeChart::standard();
        let typing = TypeSet::dual(Type::Steel, Type::Flying).unwrap();
        let worst = chart.worst_attackers(&typing);
        assert!(worst.windows(2).all(|w| w[0].multiplier <= w[1].multiplier));
        let immune: Vec<Type> = worst.iter().filter(|c| c.multiplier == 0.0).map(|c| c.ty).collect();
        assert_eq!(immune, vec![Type::Poison, Type::Ground]);
    }

    #[test]
    fn test_coverage_ranks_every_type() {
        let chart = TypeChart::standard();
        let typing = TypeSet::single(Type::Steel);
        let ranked = chart.coverage(&typing);
        assert_eq!(ranked.len(), 18);
        let top: Vec<Type> = ranked.iter().take(3).map(|c| c.ty).collect();
        assert_eq!(top, vec![Type::Fire, Type::Fighting, Type::Ground]);
        assert_eq!(ranked.last().map(|c| c.ty), Some(Type::Poison));
    }

    #[test]
    fn test_no_weaknesses_gives_empty_counters() {
        let chart = TypeChart::neutral();
        assert!(chart.best_attackers(&TypeSet::single(Type::Normal)).is_empty());
        assert!(chart.worst_attackers(&TypeSet::single(Type::Normal)).is_empty());
    }
}
