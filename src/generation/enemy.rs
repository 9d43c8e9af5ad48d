//! Budget-constrained enemy selection.

use std::sync::Arc;

use crate::catalog::Enemy;
use crate::error::{TowerError, TowerResult};
use crate::rng::RandomSource;

/// Outcome of one selection: the chosen enemy, its position in the pool and
/// the target level that was drawn
#[derive(Debug, Clone)]
pub struct EnemyPick<'e> {
    pub enemy: &'e Arc<Enemy>,
    pub index: usize,
    pub target: u32,
}

/// Draw a target uniformly in `[1, budget]` and return the enemy whose level
/// is closest to it. Ties go to the earliest enemy in the pool.
///
/// An empty pool or a zero budget is a caller bug and is rejected with
/// [`TowerError::InvalidPrecondition`].
pub fn pick_enemy_by_budget<'e>(
    enemies: &'e [Arc<Enemy>],
    budget: u32,
    rng: &mut impl RandomSource,
) -> TowerResult<EnemyPick<'e>> {
    if enemies.is_empty() {
        return Err(TowerError::InvalidPrecondition(
            "enemy selection needs a non-empty pool".into(),
        ));
    }
    if budget < 1 {
        return Err(TowerError::InvalidPrecondition(
            "enemy selection needs a budget of at least 1".into(),
        ));
    }

    let target = rng.next_below(budget) + 1;
    let mut best = 0;
    let mut best_diff = enemies[0].level.abs_diff(target);
    for (i, enemy) in enemies.iter().enumerate().skip(1) {
        let diff = enemy.level.abs_diff(target);
        if diff < best_diff {
            best = i;
            best_diff = diff;
        }
    }

    Ok(EnemyPick {
        enemy: &enemies[best],
        index: best,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Attack;
    use crate::rng::{ScriptedRng, TowerRng};

    fn pool(levels: &[u32]) -> Vec<Arc<Enemy>> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| {
                Arc::new(Enemy::new(
                    format!("enemy-{i}"),
                    10.0,
                    level,
                    vec![Attack::new("Punch", 1.0)],
                ))
            })
            .collect()
    }

    #[test]
    fn test_first_minimum_wins_tie() {
        let enemies = pool(&[1, 5, 3, 3]);
        // next_below(10) -> 2, target 3
        let mut rng = ScriptedRng::new([], [2]);
        let pick = pick_enemy_by_budget(&enemies, 10, &mut rng).unwrap();
        assert_eq!(pick.target, 3);
        assert_eq!(pick.index, 2);
        assert!(Arc::ptr_eq(pick.enemy, &enemies[2]));
    }

    #[test]
    fn test_target_stays_within_budget() {
        let enemies = pool(&[1, 2, 4, 8]);
        let mut rng = TowerRng::new(3);
        for budget in 1..=20 {
            let pick = pick_enemy_by_budget(&enemies, budget, &mut rng).unwrap();
            assert!((1..=budget).contains(&pick.target));
        }
    }

    #[test]
    fn test_budget_one_picks_closest_to_one() {
        let enemies = pool(&[4, 2, 7]);
        let mut rng = TowerRng::new(9);
        let pick = pick_enemy_by_budget(&enemies, 1, &mut rng).unwrap();
        assert_eq!(pick.target, 1);
        assert_eq!(pick.index, 1);
    }

    #[test]
    fn test_deterministic_for_fixed_source() {
        let enemies = pool(&[1, 3, 6, 9]);
        let a = pick_enemy_by_budget(&enemies, 15, &mut TowerRng::new(77)).unwrap();
        let b = pick_enemy_by_budget(&enemies, 15, &mut TowerRng::new(77)).unwrap();
        assert_eq!(a.index, b.index);
        assert_eq!(a.target, b.target);
    }

    #[test]
    fn test_preconditions_rejected() {
        let mut rng = ScriptedRng::default();
        assert!(matches!(
            pick_enemy_by_budget(&[], 5, &mut rng),
            Err(TowerError::InvalidPrecondition(_))
        ));
        assert!(matches!(
            pick_enemy_by_budget(&pool(&[1]), 0, &mut rng),
            Err(TowerError::InvalidPrecondition(_))
        ));
    }
}
