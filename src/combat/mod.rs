//! Combat resolution.
//!
//! One stateless resolver serves both directions: the player's active weapon
//! against an enemy encounter, and an enemy's primary attack against the
//! player. Only defenders that carry a multiplier table scale the damage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Attack;
use crate::player::PlayerState;

/// Anything with health that can be hit
pub trait Combatant {
    fn health(&self) -> f64;

    /// Subtract damage; health may go negative
    fn apply_damage(&mut self, amount: f64);

    /// Scale for incoming damage of `attack_id`. Defenders without a
    /// multiplier table take base damage.
    fn damage_multiplier(&self, _attack_id: &str) -> f64 {
        1.0
    }

    fn is_defeated(&self) -> bool {
        self.health() <= 0.0
    }
}

impl Combatant for PlayerState {
    fn health(&self) -> f64 {
        PlayerState::health(self)
    }

    fn apply_damage(&mut self, amount: f64) {
        self.take_damage(amount);
    }
}

/// Apply `attack` to `defender`, returning the damage subtracted
pub fn resolve_attack<D: Combatant + ?Sized>(attack: &Attack, defender: &mut D) -> f64 {
    let multiplier = defender.damage_multiplier(&attack.id);
    let damage = attack.damage * multiplier;
    defender.apply_damage(damage);
    debug!(
        attack = %attack.id,
        base = attack.damage,
        multiplier,
        damage,
        remaining = defender.health(),
        "attack resolved"
    );
    damage
}

/// Apply fixed damage with no multiplier lookup (traps)
pub fn resolve_flat_damage<D: Combatant + ?Sized>(damage: f64, defender: &mut D) -> f64 {
    defender.apply_damage(damage);
    debug!(damage, remaining = defender.health(), "flat damage applied");
    damage
}

/// Result of one attack action, surfaced to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub damage: f64,
    pub defender_health: f64,
    pub defeated: bool,
}

impl AttackOutcome {
    pub fn observe<D: Combatant + ?Sized>(damage: f64, defender: &D) -> Self {
        Self {
            damage,
            defender_health: defender.health(),
            defeated: defender.is_defeated(),
        }
    }
}
