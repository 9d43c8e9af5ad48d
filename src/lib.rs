//! Tower Dungeon - Game Core Library
//!
//! Deterministic rules for a floor-by-floor tower crawl:
//! - Content catalog (floor-types, enemies, weapons, tower height)
//! - Procedural floor generation (weighted floor-types, room rolls, enemy budget)
//! - Boss floor once the tower height is reached
//! - Room interactions (traps, treasure, encounters, stairway)
//! - Combat resolution with per-enemy damage multipliers
//! - Player state and bounded weapon inventory
//! - Session orchestration with injectable randomness

pub mod catalog;
pub mod combat;
pub mod constants;
pub mod error;
pub mod generation;
pub mod logging;
pub mod player;
pub mod rng;
pub mod room;
pub mod session;

pub use catalog::{Attack, Catalog, Enemy, FloorDefinition, LevelRange, Weapon};
pub use error::{TowerError, TowerResult};
pub use generation::{Floor, FloorGenerator};
pub use rng::{RandomSource, ScriptedRng, TowerRng, TowerSeed};
pub use session::{Direction, GameSession, SessionConfig};
