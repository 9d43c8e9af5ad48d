//! Procedural floor generation.
//!
//! Catalog + level -> floor-type (weighted) -> rooms (stairway, rolled room
//! types, budget-constrained enemies) -> [`Floor`].

pub mod enemy;
pub mod floor;
pub mod floor_manager;
pub mod selector;
pub mod weighted;

pub use enemy::{pick_enemy_by_budget, EnemyPick};
pub use floor::Floor;
pub use floor_manager::{FloorGenerator, FloorStats};
pub use selector::select_floor_type;
pub use weighted::weighted_index;
