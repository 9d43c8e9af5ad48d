//! Weighted random choice over integer weights.

use crate::rng::RandomSource;

/// Pick an index with probability proportional to its weight.
///
/// Draws `r` uniformly in `[0, total)` and returns the first index whose
/// cumulative weight exceeds it. Should float error walk past the end, the
/// last index is returned. `None` only for an empty or all-zero slice.
pub fn weighted_index(weights: &[u32], rng: &mut impl RandomSource) -> Option<usize> {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return None;
    }

    let r = rng.next_unit() * total as f64;
    let mut cumulative = 0u64;
    for (i, &weight) in weights.iter().enumerate() {
        cumulative += u64::from(weight);
        if r < cumulative as f64 {
            return Some(i);
        }
    }
    Some(weights.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, TowerRng};

    #[test]
    fn test_empty_or_zero_weights() {
        let mut rng = ScriptedRng::default();
        assert_eq!(weighted_index(&[], &mut rng), None);
        assert_eq!(weighted_index(&[0, 0], &mut rng), None);
    }

    #[test]
    fn test_cumulative_boundaries() {
        // weights 1,3 -> [0,1) picks 0, [1,4) picks 1
        let cases = [(0.0, 0), (0.24, 0), (0.25, 1), (0.99, 1)];
        for (unit, expected) in cases {
            let mut rng = ScriptedRng::new([unit], []);
            assert_eq!(weighted_index(&[1, 3], &mut rng), Some(expected), "unit {unit}");
        }
    }

    #[test]
    fn test_zero_weight_entry_never_chosen() {
        let mut rng = TowerRng::new(5);
        for _ in 0..500 {
            assert_ne!(weighted_index(&[2, 0, 2], &mut rng), Some(1));
        }
    }

    #[test]
    fn test_distribution_tracks_weights() {
        let mut rng = TowerRng::new(11);
        let mut hits = [0u32; 2];
        for _ in 0..10_000 {
            hits[weighted_index(&[1, 9], &mut rng).unwrap()] += 1;
        }
        let share = f64::from(hits[1]) / 10_000.0;
        assert!((0.85..0.95).contains(&share), "share was {share}");
    }
}
