//! Centralized game constants for the tower dungeon core.
//!
//! Room-roll thresholds, budget scaling and treasure odds are fixed design
//! parameters shared by every floor-type; they are not part of the catalog.

// =====================================================
// Floor Generation
// =====================================================

/// Probability that a non-stairway room rolls an enemy encounter
pub const ENEMY_ROOM_CHANCE: f64 = 0.5;

/// Probability that a non-stairway room rolls empty
pub const EMPTY_ROOM_CHANCE: f64 = 0.25;

/// Probability that a non-stairway room rolls a treasure chest.
/// The remaining 0.125 goes to traps.
pub const TREASURE_ROOM_CHANCE: f64 = 0.125;

/// Enemy budget per floor = level * BUDGET_MULTIPLIER
pub const BUDGET_MULTIPLIER: u32 = 5;

/// Budget never decays below this value
pub const MIN_ENEMY_BUDGET: u32 = 1;

/// Trap damage = level * TRAP_BASE_DAMAGE
pub const TRAP_BASE_DAMAGE: f64 = 1.5;

/// Room count used when the session config does not override it
pub const DEFAULT_ROOM_COUNT: u32 = 7;

// =====================================================
// Treasure
// =====================================================

/// Chance that an opened chest pays out experience
pub const TREASURE_HEALTH_CHANCE: f64 = 0.5;

/// Chance that an opened chest pays out its weapon
pub const TREASURE_WEAPON_CHANCE: f64 = 0.5;

/// Experience grant is drawn uniformly from [0, TREASURE_MAX_XP)
pub const TREASURE_MAX_XP: u32 = 100;

// =====================================================
// Boss Floor
// =====================================================

pub const BOSS_FLOOR_NAME: &str = "boss";

pub const BOSS_FLOOR_SPRITE: &str = "images/boss.png";

pub const BOSS_FLOOR_VISIBILITY: f64 = 1.0;

// =====================================================
// Player
// =====================================================

/// Weapons carried at once; the oldest is dropped on overflow
pub const MAX_WEAPONS: usize = 3;

/// Starting (and reset) health when the session config does not override it
pub const DEFAULT_PLAYER_HEALTH: f64 = 100.0;
