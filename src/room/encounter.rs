//! Per-encounter enemy state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{Attack, Enemy};
use crate::combat::Combatant;

/// Mutable health wrapped around a shared, immutable catalog enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyEncounter {
    enemy: Arc<Enemy>,
    health: f64,
}

impl EnemyEncounter {
    pub fn new(enemy: Arc<Enemy>) -> Self {
        let health = enemy.health;
        Self { enemy, health }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn primary_attack(&self) -> Option<&Attack> {
        self.enemy.primary_attack()
    }
}

impl Combatant for EnemyEncounter {
    fn health(&self) -> f64 {
        self.health
    }

    fn apply_damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    fn damage_multiplier(&self, attack_id: &str) -> f64 {
        self.enemy.multiplier_for(attack_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::resolve_attack;

    #[test]
    fn test_encounter_does_not_touch_catalog_enemy() {
        let goblin = Arc::new(
            Enemy::new("Goblin", 50.0, 1, vec![Attack::new("Punch", 5.0)])
                .with_multiplier("Slash", 2.0),
        );
        let mut encounter = EnemyEncounter::new(Arc::clone(&goblin));
        resolve_attack(&Attack::new("Slash", 10.0), &mut encounter);
        assert_eq!(encounter.health(), 30.0);
        assert_eq!(goblin.health, 50.0);
    }

    #[test]
    fn test_two_encounters_are_independent() {
        let bat = Arc::new(Enemy::new("Bat", 8.0, 1, vec![Attack::new("Bite", 1.0)]));
        let mut first = EnemyEncounter::new(Arc::clone(&bat));
        let second = EnemyEncounter::new(bat);
        first.apply_damage(8.0);
        assert!(first.is_defeated());
        assert!(!second.is_defeated());
    }
}
