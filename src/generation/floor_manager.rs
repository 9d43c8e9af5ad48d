//! Floor generation and tower progression.
//!
//! Tracks how many floors have been generated against the tower height and
//! builds either an ordinary floor (stairway plus rolled rooms) or the
//! single-room boss floor once the height is reached.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::enemy::pick_enemy_by_budget;
use super::floor::Floor;
use super::selector::select_floor_type;
use crate::catalog::{Catalog, FloorDefinition};
use crate::constants::{
    BOSS_FLOOR_NAME, BOSS_FLOOR_SPRITE, BOSS_FLOOR_VISIBILITY, BUDGET_MULTIPLIER,
    EMPTY_ROOM_CHANCE, ENEMY_ROOM_CHANCE, MIN_ENEMY_BUDGET, TRAP_BASE_DAMAGE,
    TREASURE_HEALTH_CHANCE, TREASURE_ROOM_CHANCE, TREASURE_WEAPON_CHANCE,
};
use crate::error::{TowerError, TowerResult};
use crate::rng::{RandomSource, TowerRng, TowerSeed};
use crate::room::{EnemyEncounter, Room, RoomBehavior, Treasure};

/// Builds floors from a shared catalog
#[derive(Debug, Clone)]
pub struct FloorGenerator {
    catalog: Arc<Catalog>,
    floor_before_boss: u32,
    passed_floors: u32,
    budget_trace: Vec<u32>,
}

/// Per-floor generation summary, logged and handed to callers that want it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FloorStats {
    pub enemies: usize,
    pub empty: usize,
    pub treasures: usize,
    pub traps: usize,
    pub degraded_enemy_rooms: usize,
}

impl FloorGenerator {
    /// Validates the catalog first, so content deserialized without going
    /// through `Catalog::new` is rejected here with `InvalidCatalog`.
    pub fn new(catalog: Arc<Catalog>) -> TowerResult<Self> {
        catalog.validate()?;
        let floor_before_boss = catalog.height;
        Ok(Self {
            catalog,
            floor_before_boss,
            passed_floors: 0,
            budget_trace: Vec::new(),
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn passed_floors(&self) -> u32 {
        self.passed_floors
    }

    pub fn floor_before_boss(&self) -> u32 {
        self.floor_before_boss
    }

    /// True when the next successful generation will be the boss floor
    pub fn is_boss_time(&self) -> bool {
        self.passed_floors + 1 >= self.floor_before_boss
    }

    /// Budgets handed to the enemy selector during the last generation, in
    /// call order.
    pub fn budget_trace(&self) -> &[u32] {
        &self.budget_trace
    }

    /// Generate the floor for `level` with a per-floor stream derived from
    /// the tower seed.
    pub fn generate_seeded(
        &mut self,
        level: u32,
        room_count: u32,
        seed: &TowerSeed,
    ) -> TowerResult<Floor> {
        let mut rng = TowerRng::for_floor(seed, level);
        self.generate(level, room_count, &mut rng)
    }

    /// Generate the floor for `level`.
    ///
    /// A failed generation leaves the floor counter untouched.
    pub fn generate(
        &mut self,
        level: u32,
        room_count: u32,
        rng: &mut impl RandomSource,
    ) -> TowerResult<Floor> {
        if room_count < 1 {
            return Err(TowerError::InvalidPrecondition(
                "a floor needs at least one room".into(),
            ));
        }
        self.budget_trace.clear();

        let catalog = Arc::clone(&self.catalog);
        let floor_type = select_floor_type(&catalog, level, rng)?;
        let boss = self.is_boss_time();

        let floor = if boss {
            self.build_boss(floor_type, level, rng)?
        } else {
            self.build_floor(floor_type, level, room_count, rng)
        };

        self.passed_floors += 1;
        Ok(floor)
    }

    fn build_boss(
        &mut self,
        floor_type: &FloorDefinition,
        level: u32,
        rng: &mut impl RandomSource,
    ) -> TowerResult<Floor> {
        let enemies = floor_type.enemies();
        if enemies.is_empty() {
            return Err(TowerError::NoBossCandidate { level });
        }

        let budget = initial_budget(level);
        self.budget_trace.push(budget);
        let pick = pick_enemy_by_budget(enemies, budget, rng)?;
        info!(
            level,
            boss = %pick.enemy.name,
            floor_type = %floor_type.name,
            "boss floor generated"
        );

        let room = Room::new(
            0,
            RoomBehavior::Encounter(EnemyEncounter::new(Arc::clone(pick.enemy))),
        );
        Ok(Floor::new(
            BOSS_FLOOR_NAME,
            BOSS_FLOOR_SPRITE,
            level,
            BOSS_FLOOR_VISIBILITY,
            vec![room],
        )
        .into_boss())
    }

    fn build_floor(
        &mut self,
        floor_type: &FloorDefinition,
        level: u32,
        room_count: u32,
        rng: &mut impl RandomSource,
    ) -> Floor {
        let mut budget = initial_budget(level);
        let stairs = rng.next_below(room_count) as usize;
        let mut stats = FloorStats::default();
        let mut rooms = Vec::with_capacity(room_count as usize);

        for index in 0..room_count as usize {
            if index == stairs {
                rooms.push(Room::new(index, RoomBehavior::Stairway));
                continue;
            }

            let roll = rng.next_unit();
            let behavior = if roll < ENEMY_ROOM_CHANCE {
                self.roll_enemy(floor_type, &mut budget, &mut stats, rng)
            } else if roll < ENEMY_ROOM_CHANCE + EMPTY_ROOM_CHANCE {
                stats.empty += 1;
                RoomBehavior::Empty
            } else if roll < ENEMY_ROOM_CHANCE + EMPTY_ROOM_CHANCE + TREASURE_ROOM_CHANCE {
                stats.treasures += 1;
                let weapons = floor_type.weapons();
                let weapon = if weapons.is_empty() {
                    None
                } else {
                    Some(weapons[rng.next_below(weapons.len() as u32) as usize].clone())
                };
                RoomBehavior::Treasure(Treasure::new(
                    weapon,
                    TREASURE_HEALTH_CHANCE,
                    TREASURE_WEAPON_CHANCE,
                ))
            } else {
                stats.traps += 1;
                RoomBehavior::Trap {
                    damage: TRAP_BASE_DAMAGE * f64::from(level),
                }
            };
            rooms.push(Room::new(index, behavior));
        }

        info!(
            level,
            floor_type = %floor_type.name,
            rooms = room_count,
            stairs,
            ?stats,
            "floor generated"
        );
        Floor::new(
            floor_type.name.clone(),
            floor_type.sprite.clone(),
            level,
            floor_type.visibility,
            rooms,
        )
    }

    fn roll_enemy(
        &mut self,
        floor_type: &FloorDefinition,
        budget: &mut u32,
        stats: &mut FloorStats,
        rng: &mut impl RandomSource,
    ) -> RoomBehavior {
        let enemies = floor_type.enemies();
        self.budget_trace.push(*budget);
        match pick_enemy_by_budget(enemies, *budget, rng) {
            Ok(pick) => {
                debug!(
                    budget = *budget,
                    target = pick.target,
                    enemy = %pick.enemy.name,
                    "enemy placed"
                );
                *budget = budget.saturating_sub(pick.enemy.level).max(MIN_ENEMY_BUDGET);
                stats.enemies += 1;
                RoomBehavior::Encounter(EnemyEncounter::new(Arc::clone(pick.enemy)))
            }
            Err(_) => {
                // only reachable with an empty pool; the budget is kept >= 1
                self.budget_trace.pop();
                warn!(floor_type = %floor_type.name, "enemy roll on empty pool, room left empty");
                stats.empty += 1;
                stats.degraded_enemy_rooms += 1;
                RoomBehavior::Empty
            }
        }
    }
}

fn initial_budget(level: u32) -> u32 {
    level
        .saturating_mul(BUDGET_MULTIPLIER)
        .max(MIN_ENEMY_BUDGET)
}
