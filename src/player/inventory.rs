//! Weapon inventory.
//!
//! The player carries at most [`MAX_WEAPONS`] weapons. Picking up one more
//! drops the oldest (index 0); the active selection follows the weapon it
//! pointed at when that weapon survives.

use serde::{Deserialize, Serialize};

use crate::catalog::Weapon;
use crate::constants::MAX_WEAPONS;
use crate::error::{TowerError, TowerResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponInventory {
    weapons: Vec<Weapon>,
    active: usize,
}

impl WeaponInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weapon(weapon: Weapon) -> Self {
        Self {
            weapons: vec![weapon],
            active: 0,
        }
    }

    /// Append a weapon, evicting the oldest once capacity is exceeded.
    /// Returns the evicted weapon, if any.
    pub fn add(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapons.push(weapon);
        if self.weapons.len() <= MAX_WEAPONS {
            return None;
        }
        let evicted = self.weapons.remove(0);
        self.active = self.active.saturating_sub(1);
        Some(evicted)
    }

    /// Swap the weapon in `slot`, returning the one it held
    pub fn replace(&mut self, slot: usize, weapon: Weapon) -> TowerResult<Weapon> {
        let len = self.weapons.len();
        let held = self
            .weapons
            .get_mut(slot)
            .ok_or(TowerError::WeaponIndexOutOfRange { index: slot, len })?;
        Ok(std::mem::replace(held, weapon))
    }

    pub fn select(&mut self, index: usize) -> TowerResult<&Weapon> {
        let len = self.weapons.len();
        let weapon = self
            .weapons
            .get(index)
            .ok_or(TowerError::WeaponIndexOutOfRange { index, len })?;
        self.active = index;
        Ok(weapon)
    }

    pub fn active(&self) -> Option<&Weapon> {
        self.weapons.get(self.active)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.weapons.len() >= MAX_WEAPONS
    }
}
