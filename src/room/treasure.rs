//! Treasure chests.
//!
//! A chest decides its payout only when opened, not on entry, and pays out
//! exactly once.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Weapon;
use crate::constants::TREASURE_MAX_XP;
use crate::player::PlayerState;
use crate::rng::RandomSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treasure {
    weapon: Option<Weapon>,
    health_chance: f64,
    weapon_chance: f64,
    opened: bool,
}

/// What opening a chest produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreasureReward {
    Experience(u32),
    Weapon {
        weapon: Weapon,
        evicted: Option<Weapon>,
    },
    AlreadyOpened,
}

impl Treasure {
    pub fn new(weapon: Option<Weapon>, health_chance: f64, weapon_chance: f64) -> Self {
        Self {
            weapon,
            health_chance,
            weapon_chance,
            opened: false,
        }
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn health_chance(&self) -> f64 {
        self.health_chance
    }

    pub fn weapon_chance(&self) -> f64 {
        self.weapon_chance
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Roll the payout and apply it to the player.
    ///
    /// `roll < health_chance` grants experience; the next `weapon_chance`
    /// slice grants the chest's weapon. A chest without a weapon, or a roll
    /// past both slices, falls back to experience.
    pub fn open(&mut self, player: &mut PlayerState, rng: &mut impl RandomSource) -> TreasureReward {
        if self.opened {
            return TreasureReward::AlreadyOpened;
        }
        self.opened = true;

        let roll = rng.next_unit();
        if roll >= self.health_chance && roll < self.health_chance + self.weapon_chance {
            if let Some(weapon) = self.weapon.take() {
                let evicted = player.add_weapon(weapon.clone());
                debug!(weapon = %weapon.name, evicted = ?evicted.as_ref().map(|w| &w.name), "chest granted weapon");
                return TreasureReward::Weapon { weapon, evicted };
            }
        }

        let xp = rng.next_below(TREASURE_MAX_XP);
        player.gain_experience(xp);
        debug!(xp, "chest granted experience");
        TreasureReward::Experience(xp)
    }
}
