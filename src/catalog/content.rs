//! Immutable content values: attacks, enemies, weapons.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single attack: identifier (damage type) plus base damage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub id: String,
    pub damage: f64,
}

impl Attack {
    pub fn new(id: impl Into<String>, damage: f64) -> Self {
        Self {
            id: id.into(),
            damage,
        }
    }
}

/// Catalog enemy. Never mutated; per-encounter health lives in
/// [`crate::room::EnemyEncounter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub health: f64,
    pub level: u32,
    pub attacks: Vec<Attack>,
    #[serde(default)]
    pub damage_multipliers: HashMap<String, f64>,
    pub sprite: String,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: f64, level: u32, attacks: Vec<Attack>) -> Self {
        Self {
            name: name.into(),
            health,
            level,
            attacks,
            damage_multipliers: HashMap::new(),
            sprite: String::new(),
        }
    }

    pub fn with_multiplier(mut self, attack_id: impl Into<String>, multiplier: f64) -> Self {
        self.damage_multipliers.insert(attack_id.into(), multiplier);
        self
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    /// First declared attack, used when the enemy strikes the player
    pub fn primary_attack(&self) -> Option<&Attack> {
        self.attacks.first()
    }

    /// Multiplier applied to incoming damage of the given type (1.0 if absent)
    pub fn multiplier_for(&self, attack_id: &str) -> f64 {
        self.damage_multipliers
            .get(attack_id)
            .copied()
            .unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub level: u32,
    pub attack: Attack,
    pub sprite: String,
}

impl Weapon {
    pub fn new(name: impl Into<String>, level: u32, attack: Attack) -> Self {
        Self {
            name: name.into(),
            level,
            attack,
            sprite: String::new(),
        }
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_default() {
        let goblin = Enemy::new("Goblin", 50.0, 1, vec![Attack::new("Punch", 5.0)])
            .with_multiplier("Slash", 2.0);
        assert_eq!(goblin.multiplier_for("Slash"), 2.0);
        assert_eq!(goblin.multiplier_for("Fire"), 1.0);
    }

    #[test]
    fn test_primary_attack_is_first() {
        let enemy = Enemy::new(
            "Mage",
            20.0,
            3,
            vec![Attack::new("magical", 10.0), Attack::new("Punch", 2.0)],
        );
        assert_eq!(enemy.primary_attack().map(|a| a.id.as_str()), Some("magical"));

        let harmless = Enemy::new("Slime", 5.0, 1, vec![]);
        assert!(harmless.primary_attack().is_none());
    }

    #[test]
    fn test_enemy_deserializes_without_multipliers() {
        let json = r#"{
            "name": "Bat",
            "health": 8.0,
            "level": 2,
            "attacks": [{"id": "Bite", "damage": 3.0}],
            "sprite": "bat.png"
        }"#;
        let bat: Enemy = serde_json::from_str(json).unwrap();
        assert!(bat.damage_multipliers.is_empty());
        assert_eq!(bat.level, 2);
    }
}
