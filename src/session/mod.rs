//! Game session: one player climbing one tower.
//!
//! The session owns the player, the current floor and the random source,
//! and turns discrete player actions (enter, attack, open, climb) into state
//! changes. Nothing here blocks or spans threads; every call finishes before
//! it returns.

pub mod config;

pub use config::SessionConfig;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Weapon};
use crate::combat::{resolve_attack, AttackOutcome, Combatant};
use crate::error::{TowerError, TowerResult};
use crate::generation::{Floor, FloorGenerator};
use crate::player::PlayerState;
use crate::rng::{RandomSource, TowerRng, TowerSeed};
use crate::room::{EnemyEncounter, InteractionOutcome, RoomKind, TreasureReward};

/// Sideways movement between rooms of a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

pub struct GameSession<R: RandomSource = TowerRng> {
    catalog: Arc<Catalog>,
    config: SessionConfig,
    generator: FloorGenerator,
    player: PlayerState,
    floor: Floor,
    level: u32,
    rng: R,
    /// When set, each floor is built from its own stream derived from this
    /// seed, so draws spent inside rooms never shift later floors.
    floor_seed: Option<TowerSeed>,
}

impl GameSession<TowerRng> {
    /// Session seeded from the config's tower seed.
    ///
    /// Floors come from per-floor streams (`TowerRng::for_floor`); the
    /// session's own generator only serves in-room draws.
    pub fn from_config(catalog: Arc<Catalog>, config: SessionConfig) -> TowerResult<Self> {
        let rng = TowerRng::new(config.tower_seed);
        let seed = config.seed();
        Self::start(catalog, config, rng, Some(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session and generate the first floor.
    ///
    /// Every draw, floor generation included, comes from `rng` in call order.
    pub fn new(catalog: Arc<Catalog>, config: SessionConfig, rng: R) -> TowerResult<Self> {
        Self::start(catalog, config, rng, None)
    }

    fn start(
        catalog: Arc<Catalog>,
        config: SessionConfig,
        mut rng: R,
        floor_seed: Option<TowerSeed>,
    ) -> TowerResult<Self> {
        config.validate()?;
        let mut generator = FloorGenerator::new(Arc::clone(&catalog))?;
        let uncovered = catalog.uncovered_levels();
        if !uncovered.is_empty() {
            warn!(tower = %catalog.name, ?uncovered, "catalog leaves tower levels uncovered");
        }

        let floor = match &floor_seed {
            Some(seed) => generator.generate_seeded(1, config.room_count, seed)?,
            None => generator.generate(1, config.room_count, &mut rng)?,
        };
        let player = PlayerState::new(config.starting_health);
        info!(
            tower = %catalog.name,
            height = catalog.height,
            seed = config.tower_seed,
            per_floor_streams = floor_seed.is_some(),
            "session started"
        );

        Ok(Self {
            catalog,
            config,
            generator,
            player,
            floor,
            level: 1,
            rng,
            floor_seed,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn generator(&self) -> &FloorGenerator {
        &self.generator
    }

    // -- floors --------------------------------------------------------

    /// Replace the current floor with a freshly generated one for `level`,
    /// using the configured room count.
    pub fn generate_floor(&mut self, level: u32) -> TowerResult<&Floor> {
        self.generate_floor_with(level, self.config.room_count)
    }

    /// Same as `generate_floor` with an explicit room count.
    /// On error the current floor stays installed.
    pub fn generate_floor_with(&mut self, level: u32, room_count: u32) -> TowerResult<&Floor> {
        let floor = match &self.floor_seed {
            Some(seed) => self.generator.generate_seeded(level, room_count, seed)?,
            None => self.generator.generate(level, room_count, &mut self.rng)?,
        };
        self.floor = floor;
        self.level = level;
        self.player.move_to(0);
        info!(level, floor = %self.floor.name, boss = self.floor.is_boss(), "floor installed");
        Ok(&self.floor)
    }

    pub fn go_to_next_floor(&mut self) -> TowerResult<&Floor> {
        if self.floor.is_boss() {
            return Err(TowerError::TowerCompleted);
        }
        self.generate_floor(self.level + 1)
    }

    /// Climb from the stairway the player is standing on.
    pub fn confirm_stairway(&mut self) -> TowerResult<&Floor> {
        let here = self.floor.room(self.player.current_room())?;
        if here.kind() != RoomKind::Stairway {
            return Err(TowerError::NotOnStairway);
        }
        self.go_to_next_floor()
    }

    pub fn floor_visibility(&self) -> f64 {
        self.floor.visibility
    }

    /// Draw whether the presentation layer shows a room's real content
    pub fn reveal_room(&mut self) -> bool {
        self.floor.reveals(&mut self.rng)
    }

    // -- movement ------------------------------------------------------

    pub fn enter_room(&mut self, index: usize) -> TowerResult<InteractionOutcome> {
        let room = self.floor.room_mut(index)?;
        let outcome = room.enter(&mut self.player);
        debug!(index, ?outcome, "room entered");
        Ok(outcome)
    }

    pub fn enter_first_room(&mut self) -> TowerResult<InteractionOutcome> {
        self.enter_room(0)
    }

    /// Step to the neighbouring room, wrapping at either end.
    pub fn change_room(&mut self, direction: Direction) -> TowerResult<InteractionOutcome> {
        let len = self.floor.len();
        let current = self.player.current_room();
        let next = match direction {
            Direction::Right => (current + 1) % len,
            Direction::Left => (current + len - 1) % len,
        };
        self.enter_room(next)
    }

    // -- combat --------------------------------------------------------

    /// The player strikes the enemy in room `index` with the active weapon.
    /// Defeating it restores the player to full health.
    pub fn attack_enemy(&mut self, index: usize) -> TowerResult<AttackOutcome> {
        let attack = self
            .player
            .active_weapon()
            .map(|weapon| weapon.attack.clone())
            .ok_or(TowerError::NoActiveWeapon)?;
        let encounter = live_encounter(&mut self.floor, index)?;

        let damage = resolve_attack(&attack, &mut *encounter);
        let outcome = AttackOutcome::observe(damage, &*encounter);
        if outcome.defeated {
            info!(index, enemy = %encounter.enemy().name, "enemy defeated");
            self.player.reset_health();
        }
        Ok(outcome)
    }

    /// The enemy in room `index` strikes the player with its primary attack.
    pub fn attack_player(&mut self, index: usize) -> TowerResult<AttackOutcome> {
        let encounter = live_encounter(&mut self.floor, index)?;
        let attack = encounter.primary_attack().cloned().ok_or_else(|| {
            TowerError::InvalidPrecondition(format!(
                "enemy '{}' has no attacks",
                encounter.enemy().name
            ))
        })?;

        let damage = resolve_attack(&attack, &mut self.player);
        let outcome = AttackOutcome::observe(damage, &self.player);
        if outcome.defeated {
            info!(index, "player defeated");
        }
        Ok(outcome)
    }

    pub fn open_treasure(&mut self, index: usize) -> TowerResult<TreasureReward> {
        let room = self.floor.room_mut(index)?;
        let treasure = room
            .treasure_mut()
            .ok_or(TowerError::NotATreasure { index })?;
        let reward = treasure.open(&mut self.player, &mut self.rng);
        debug!(index, ?reward, "treasure opened");
        Ok(reward)
    }

    // -- player --------------------------------------------------------

    pub fn player_health(&self) -> f64 {
        self.player.health()
    }

    pub fn player_experience(&self) -> u32 {
        self.player.experience()
    }

    pub fn player_weapons(&self) -> &[Weapon] {
        self.player.weapons()
    }

    pub fn active_weapon(&self) -> Option<&Weapon> {
        self.player.active_weapon()
    }

    pub fn reset_player_health(&mut self) {
        self.player.reset_health();
    }

    pub fn heal(&mut self, amount: f64) {
        self.player.heal(amount);
    }

    pub fn add_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.player.add_weapon(weapon)
    }

    pub fn select_weapon(&mut self, index: usize) -> TowerResult<&Weapon> {
        self.player.select_weapon(index)
    }

    /// Swap a specific slot instead of FIFO eviction; returns the old weapon
    pub fn replace_weapon(&mut self, slot: usize, weapon: Weapon) -> TowerResult<Weapon> {
        self.player.replace_weapon(slot, weapon)
    }

    // -- presentation lookups ------------------------------------------

    /// Weapon still inside the chest in room `index`, if any
    pub fn treasure_weapon(&self, index: usize) -> TowerResult<Option<&Weapon>> {
        let room = self.floor.room(index)?;
        room.treasure()
            .map(|treasure| treasure.weapon())
            .ok_or(TowerError::NotATreasure { index })
    }

    pub fn enemy_sprite(&self, index: usize) -> TowerResult<&str> {
        let room = self.floor.room(index)?;
        room.encounter()
            .map(|encounter| encounter.enemy().sprite.as_str())
            .ok_or(TowerError::NotAnEncounter { index })
    }

    /// Effect sprite for the active weapon's attack type
    pub fn active_attack_effect(&self) -> Option<&str> {
        let weapon = self.player.active_weapon()?;
        self.catalog.attack_effect(&weapon.attack.id)
    }

    // -- progress ------------------------------------------------------

    /// True while the player is on the boss floor
    pub fn is_boss_time(&self) -> bool {
        self.floor.is_boss()
    }

    pub fn is_victory(&self) -> bool {
        self.floor.is_boss()
            && self
                .floor
                .rooms()
                .iter()
                .filter_map(|room| room.encounter())
                .all(|encounter| encounter.is_defeated())
    }

    pub fn is_game_over(&self) -> bool {
        self.player.is_defeated()
    }
}

fn live_encounter(floor: &mut Floor, index: usize) -> TowerResult<&mut EnemyEncounter> {
    let encounter = floor
        .room_mut(index)?
        .encounter_mut()
        .ok_or(TowerError::NotAnEncounter { index })?;
    if encounter.is_defeated() {
        return Err(TowerError::EncounterResolved { index });
    }
    Ok(encounter)
}
