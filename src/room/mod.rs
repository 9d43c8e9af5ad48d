//! Rooms and their behaviors.
//!
//! The behavior set is closed: empty, enemy encounter, trap, treasure,
//! stairway. Interaction dispatches by match on [`RoomBehavior`].

use serde::{Deserialize, Serialize};

use crate::combat::{resolve_flat_damage, Combatant};
use crate::player::PlayerState;

pub mod encounter;
pub mod treasure;

pub use encounter::EnemyEncounter;
pub use treasure::{Treasure, TreasureReward};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoomBehavior {
    Empty,
    Encounter(EnemyEncounter),
    Trap { damage: f64 },
    Treasure(Treasure),
    Stairway,
}

/// Behavior tag without payload, for presentation and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    Empty,
    Enemy,
    Trap,
    Treasure,
    Stairway,
}

impl RoomBehavior {
    pub fn kind(&self) -> RoomKind {
        match self {
            Self::Empty => RoomKind::Empty,
            Self::Encounter(_) => RoomKind::Enemy,
            Self::Trap { .. } => RoomKind::Trap,
            Self::Treasure(_) => RoomKind::Treasure,
            Self::Stairway => RoomKind::Stairway,
        }
    }
}

/// Effect of entering a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionOutcome {
    Nothing,
    TrapTriggered { damage: f64, player_health: f64 },
    TreasureFound { opened: bool },
    EncounterStarted { enemy: String, enemy_health: f64, defeated: bool },
    /// The player may confirm the climb; entering alone changes nothing
    StairwayReached,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    index: usize,
    behavior: RoomBehavior,
}

impl Room {
    pub fn new(index: usize, behavior: RoomBehavior) -> Self {
        Self { index, behavior }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn behavior(&self) -> &RoomBehavior {
        &self.behavior
    }

    pub fn kind(&self) -> RoomKind {
        self.behavior.kind()
    }

    pub fn encounter(&self) -> Option<&EnemyEncounter> {
        match &self.behavior {
            RoomBehavior::Encounter(encounter) => Some(encounter),
            _ => None,
        }
    }

    pub fn encounter_mut(&mut self) -> Option<&mut EnemyEncounter> {
        match &mut self.behavior {
            RoomBehavior::Encounter(encounter) => Some(encounter),
            _ => None,
        }
    }

    pub fn treasure(&self) -> Option<&Treasure> {
        match &self.behavior {
            RoomBehavior::Treasure(treasure) => Some(treasure),
            _ => None,
        }
    }

    pub fn treasure_mut(&mut self) -> Option<&mut Treasure> {
        match &mut self.behavior {
            RoomBehavior::Treasure(treasure) => Some(treasure),
            _ => None,
        }
    }

    /// Move the player here and apply the entry effect.
    ///
    /// Only traps act on entry. Chests wait to be opened, enemies wait for
    /// an attack, stairs wait for confirmation.
    pub fn enter(&mut self, player: &mut PlayerState) -> InteractionOutcome {
        player.move_to(self.index);
        match &mut self.behavior {
            RoomBehavior::Empty => InteractionOutcome::Nothing,
            RoomBehavior::Trap { damage } => {
                let damage = resolve_flat_damage(*damage, player);
                InteractionOutcome::TrapTriggered {
                    damage,
                    player_health: player.health(),
                }
            }
            RoomBehavior::Treasure(treasure) => InteractionOutcome::TreasureFound {
                opened: treasure.is_opened(),
            },
            RoomBehavior::Encounter(encounter) => InteractionOutcome::EncounterStarted {
                enemy: encounter.enemy().name.clone(),
                enemy_health: encounter.health(),
                defeated: encounter.is_defeated(),
            },
            RoomBehavior::Stairway => InteractionOutcome::StairwayReached,
        }
    }
}
