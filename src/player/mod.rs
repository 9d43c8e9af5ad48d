//! Player state: health, experience, weapons, position on the floor.
//!
//! Created once per session. Health is reset between encounters; nothing
//! else is torn down until the session ends.

use serde::{Deserialize, Serialize};

use crate::catalog::Weapon;
use crate::error::TowerResult;

pub mod inventory;

pub use inventory::WeaponInventory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    health: f64,
    max_health: f64,
    experience: u32,
    inventory: WeaponInventory,
    current_room: usize,
}

impl PlayerState {
    pub fn new(max_health: f64) -> Self {
        Self {
            health: max_health,
            max_health,
            experience: 0,
            inventory: WeaponInventory::new(),
            current_room: 0,
        }
    }

    pub fn with_weapon(max_health: f64, weapon: Weapon) -> Self {
        Self {
            inventory: WeaponInventory::with_weapon(weapon),
            ..Self::new(max_health)
        }
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    /// Health clamped at zero, for display
    pub fn displayed_health(&self) -> f64 {
        self.health.max(0.0)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// Subtract damage; health may go negative
    pub fn take_damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    pub fn heal(&mut self, amount: f64) {
        self.health += amount;
    }

    pub fn reset_health(&mut self) {
        self.health = self.max_health;
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn gain_experience(&mut self, xp: u32) {
        self.experience = self.experience.saturating_add(xp);
    }

    pub fn current_room(&self) -> usize {
        self.current_room
    }

    pub fn move_to(&mut self, room_index: usize) {
        self.current_room = room_index;
    }

    pub fn weapons(&self) -> &[Weapon] {
        self.inventory.weapons()
    }

    pub fn active_weapon(&self) -> Option<&Weapon> {
        self.inventory.active()
    }

    pub fn active_weapon_index(&self) -> usize {
        self.inventory.active_index()
    }

    /// FIFO add; returns the evicted weapon when the inventory overflowed
    pub fn add_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.inventory.add(weapon)
    }

    pub fn replace_weapon(&mut self, slot: usize, weapon: Weapon) -> TowerResult<Weapon> {
        self.inventory.replace(slot, weapon)
    }

    pub fn select_weapon(&mut self, index: usize) -> TowerResult<&Weapon> {
        self.inventory.select(index)
    }
}
