use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tower_core::combat::resolve_attack;
use tower_core::generation::{pick_enemy_by_budget, select_floor_type};
use tower_core::room::EnemyEncounter;
use tower_core::{
    Attack, Catalog, Enemy, FloorDefinition, FloorGenerator, LevelRange, TowerRng, TowerSeed,
    Weapon,
};

fn enemies(count: u32) -> Vec<Enemy> {
    (1..=count)
        .map(|level| {
            Enemy::new(format!("enemy{level}"), 20.0, level, vec![Attack::new("Hit", 2.0)])
                .with_multiplier("Slash", 1.5)
        })
        .collect()
}

fn catalog() -> Arc<Catalog> {
    let floors = (0..10u32)
        .map(|i| {
            FloorDefinition::new(format!("type{i}"), "bench.png", LevelRange::new(i * 10 + 1, i * 10 + 20))
                .with_enemies(enemies(12))
                .with_weapons([Weapon::new("Blade", 1, Attack::new("Slash", 5.0))])
                .with_spawn_weight(i + 1)
        })
        .collect();
    Arc::new(Catalog::new("Bench Tower", "", 1000, floors).unwrap())
}

fn bench_floor_generation(c: &mut Criterion) {
    let catalog = catalog();

    c.bench_function("generate_floor_7_rooms", |b| {
        let mut rng = TowerRng::new(42);
        b.iter(|| {
            let mut generator = FloorGenerator::new(Arc::clone(&catalog)).unwrap();
            generator
                .generate(black_box(15), black_box(7), &mut rng)
                .unwrap()
        })
    });

    c.bench_function("generate_floor_seeded_50_rooms", |b| {
        let seed = TowerSeed { seed: 42 };
        b.iter(|| {
            let mut generator = FloorGenerator::new(Arc::clone(&catalog)).unwrap();
            generator
                .generate_seeded(black_box(55), black_box(50), &seed)
                .unwrap()
        })
    });

    c.bench_function("select_floor_type", |b| {
        let mut rng = TowerRng::new(7);
        b.iter(|| select_floor_type(&catalog, black_box(25), &mut rng).map(|d| d.spawn_weight))
    });

    c.bench_function("floor_hash", |b| {
        let seed = TowerSeed { seed: 42 };
        b.iter(|| seed.floor_hash(black_box(17)))
    });
}

fn bench_enemy_selection(c: &mut Criterion) {
    let pool: Vec<Arc<Enemy>> = enemies(64).into_iter().map(Arc::new).collect();

    c.bench_function("pick_enemy_by_budget_64", |b| {
        let mut rng = TowerRng::new(3);
        b.iter(|| pick_enemy_by_budget(&pool, black_box(50), &mut rng).map(|p| p.index))
    });
}

fn bench_combat(c: &mut Criterion) {
    let enemy = Arc::new(Enemy::new("Dummy", f64::MAX, 1, vec![Attack::new("Hit", 1.0)]).with_multiplier("Slash", 2.0));
    let attack = Attack::new("Slash", 10.0);

    c.bench_function("resolve_attack", |b| {
        let mut encounter = EnemyEncounter::new(Arc::clone(&enemy));
        b.iter(|| resolve_attack(black_box(&attack), &mut encounter))
    });
}

criterion_group!(benches, bench_floor_generation, bench_enemy_selection, bench_combat);
criterion_main!(benches);
