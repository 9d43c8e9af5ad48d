//! Content catalog: floor-type templates plus tower metadata.
//!
//! The catalog is built once from already-parsed content and handed to the
//! floor generator. It is read-only afterwards; enemies are shared behind
//! `Arc` so encounters can point at their template without copying it.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{TowerError, TowerResult};

pub mod content;

pub use content::{Attack, Enemy, Weapon};

/// Inclusive level range in which a floor-type may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    pub min: u32,
    pub max: u32,
}

impl LevelRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, level: u32) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

/// Template from which floors are instantiated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorDefinition {
    pub name: String,
    pub sprite: String,
    #[serde(default)]
    pub enemy_pool: Option<Vec<Arc<Enemy>>>,
    #[serde(default)]
    pub weapon_pool: Option<Vec<Weapon>>,
    pub level_range: LevelRange,
    pub spawn_weight: u32,
    pub visibility: f64,
}

impl FloorDefinition {
    /// Floor-type with no pools, weight 1 and full visibility
    pub fn new(name: impl Into<String>, sprite: impl Into<String>, level_range: LevelRange) -> Self {
        Self {
            name: name.into(),
            sprite: sprite.into(),
            enemy_pool: None,
            weapon_pool: None,
            level_range,
            spawn_weight: 1,
            visibility: 1.0,
        }
    }

    pub fn with_enemies(mut self, enemies: impl IntoIterator<Item = Enemy>) -> Self {
        self.enemy_pool = Some(enemies.into_iter().map(Arc::new).collect());
        self
    }

    pub fn with_weapons(mut self, weapons: impl IntoIterator<Item = Weapon>) -> Self {
        self.weapon_pool = Some(weapons.into_iter().collect());
        self
    }

    pub fn with_spawn_weight(mut self, weight: u32) -> Self {
        self.spawn_weight = weight;
        self
    }

    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }

    /// Enemy pool, empty when the floor-type declares none
    pub fn enemies(&self) -> &[Arc<Enemy>] {
        self.enemy_pool.as_deref().unwrap_or(&[])
    }

    /// Weapon pool, empty when the floor-type declares none
    pub fn weapons(&self) -> &[Weapon] {
        self.weapon_pool.as_deref().unwrap_or(&[])
    }

    fn validate(&self) -> TowerResult<()> {
        let invalid = |why: String| -> TowerResult<()> {
            Err(TowerError::InvalidCatalog(format!("{}: {why}", self.name)))
        };

        if self.level_range.min > self.level_range.max {
            return invalid(format!(
                "level range {}..={} is inverted",
                self.level_range.min, self.level_range.max
            ));
        }
        if self.spawn_weight < 1 {
            return invalid("spawn weight must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.visibility) {
            return invalid(format!("visibility {} outside [0, 1]", self.visibility));
        }
        for enemy in self.enemies() {
            if enemy.health <= 0.0 {
                return invalid(format!("enemy {} has non-positive health", enemy.name));
            }
            if enemy.level < 1 {
                return invalid(format!("enemy {} has level 0", enemy.name));
            }
            if enemy.attacks.is_empty() {
                return invalid(format!("enemy {} declares no attacks", enemy.name));
            }
        }
        Ok(())
    }
}

/// Validated content handle injected into the floor generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    pub description: String,
    pub height: u32,
    pub floors: Vec<FloorDefinition>,
    /// Attack id -> effect sprite, for the presentation layer
    #[serde(default)]
    pub attack_effects: HashMap<String, String>,
}

impl Catalog {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        height: u32,
        floors: Vec<FloorDefinition>,
    ) -> TowerResult<Self> {
        let catalog = Self {
            name: name.into(),
            description: description.into(),
            height,
            floors,
            attack_effects: HashMap::new(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn with_attack_effect(mut self, attack_id: impl Into<String>, effect: impl Into<String>) -> Self {
        self.attack_effects.insert(attack_id.into(), effect.into());
        self
    }

    /// Check every definition's invariants plus the tower height.
    /// `FloorGenerator::new` runs this, so deserialized catalogs are checked
    /// before any floor is built.
    pub fn validate(&self) -> TowerResult<()> {
        if self.height < 1 {
            return Err(TowerError::InvalidCatalog(
                "tower height must be at least 1".into(),
            ));
        }
        self.floors.iter().try_for_each(FloorDefinition::validate)
    }

    /// Definitions whose level range covers `level`, in catalog order
    pub fn eligible(&self, level: u32) -> impl Iterator<Item = &FloorDefinition> {
        self.floors
            .iter()
            .filter(move |def| def.level_range.contains(level))
    }

    /// Levels in [1, height] that no floor-type covers
    pub fn uncovered_levels(&self) -> Vec<u32> {
        (1..=self.height)
            .filter(|&level| self.eligible(level).next().is_none())
            .collect()
    }

    /// Fails with the first uncovered level, if any
    pub fn verify_coverage(&self) -> TowerResult<()> {
        match self.uncovered_levels().first() {
            Some(&level) => Err(TowerError::NoEligibleFloorType { level }),
            None => Ok(()),
        }
    }

    pub fn attack_effect(&self, attack_id: &str) -> Option<&str> {
        self.attack_effects.get(attack_id).map(String::as_str)
    }
}
