//! Injectable randomness.
//!
//! Every random decision in the core (floor-type weighting, stairway
//! placement, room-type rolls, enemy targets, treasure payouts) goes through
//! [`RandomSource`], so a test can fix the exact sequence of draws.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

/// Source of uniform draws consumed by generation and interaction
pub trait RandomSource {
    /// Uniform real in [0, 1)
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in [0, bound). `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Seeded production generator.
///
/// Wraps Xoshiro256** for reproducible streams; remembers its seed so a run
/// can be reported and replayed.
#[derive(Debug, Clone)]
pub struct TowerRng {
    rng: Xoshiro256StarStar,
    seed: u64,
}

impl TowerRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            seed,
        }
    }

    /// Fresh generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Independent stream for one floor of a seeded tower
    pub fn for_floor(tower_seed: &TowerSeed, level: u32) -> Self {
        Self::new(tower_seed.floor_hash(level))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for TowerRng {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Tower seed - the root of every per-floor stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerSeed {
    pub seed: u64,
}

impl Default for TowerSeed {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl TowerSeed {
    /// Deterministic floor hash from tower seed and level
    pub fn floor_hash(&self, level: u32) -> u64 {
        let mut hasher = Sha3_256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(level.to_le_bytes());
        let digest = hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(head)
    }
}

/// Replays pre-recorded draws.
///
/// Unit and integer draws come from separate queues. Integers are reduced
/// modulo the requested bound; an exhausted queue yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    units: VecDeque<f64>,
    ints: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(units: impl IntoIterator<Item = f64>, ints: impl IntoIterator<Item = u32>) -> Self {
        Self {
            units: units.into_iter().collect(),
            ints: ints.into_iter().collect(),
        }
    }

    pub fn push_unit(&mut self, value: f64) -> &mut Self {
        self.units.push_back(value);
        self
    }

    pub fn push_int(&mut self, value: u32) -> &mut Self {
        self.ints.push_back(value);
        self
    }

    /// Draws not yet consumed: (units, ints)
    pub fn remaining(&self) -> (usize, usize) {
        (self.units.len(), self.ints.len())
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0).clamp(0.0, 1.0 - f64::EPSILON)
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.ints.pop_front().unwrap_or(0) % bound
    }
}
