//! End-to-end climbs through `GameSession` with scripted randomness.

use std::sync::Arc;

use tower_core::room::{InteractionOutcome, RoomKind, TreasureReward};
use tower_core::{
    Attack, Catalog, Direction, Enemy, FloorDefinition, GameSession, LevelRange, ScriptedRng,
    SessionConfig, TowerError, Weapon,
};

fn catalog() -> Arc<Catalog> {
    let imp = Enemy::new("Imp", 8.0, 1, vec![Attack::new("Scratch", 3.0)])
        .with_multiplier("Fire", 3.0)
        .with_sprite("images/imp.png");
    let golem = Enemy::new("Golem", 30.0, 4, vec![Attack::new("Slam", 12.0)])
        .with_multiplier("Slash", 0.5)
        .with_sprite("images/golem.png");
    let floors = vec![FloorDefinition::new("Forge", "images/forge.png", LevelRange::new(1, 3))
        .with_enemies([imp, golem])
        .with_weapons([Weapon::new("Flame Sword", 3, Attack::new("Fire", 5.0))])
        .with_visibility(0.75)];
    Arc::new(
        Catalog::new("Forge Tower", "three floors of heat", 3, floors)
            .unwrap()
            .with_attack_effect("Fire", "effects/fire.png"),
    )
}

fn config(room_count: u32) -> SessionConfig {
    SessionConfig {
        room_count,
        starting_health: 40.0,
        ..SessionConfig::default()
    }
}

fn dagger() -> Weapon {
    Weapon::new("Dagger", 1, Attack::new("Slash", 4.0))
}

#[test]
fn test_full_climb_to_victory() {
    let mut rng = ScriptedRng::default();
    // floor 1: floor-type, stairs at 2, rooms: imp (target 1), chest
    rng.push_unit(0.0).push_int(2);
    rng.push_unit(0.1).push_int(0);
    rng.push_unit(0.8).push_int(0);
    // chest roll: weapon slice
    rng.push_unit(0.6);
    // floor 2: floor-type, stairs at 0, rooms: trap, empty
    rng.push_unit(0.0).push_int(0);
    rng.push_unit(0.9);
    rng.push_unit(0.6);
    // floor 3 (boss): floor-type, boss target 5 -> golem
    rng.push_unit(0.0).push_int(4);

    let mut session = GameSession::new(catalog(), config(3), rng).unwrap();
    session.add_weapon(dagger());
    assert_eq!(
        session.floor().kinds(),
        vec![RoomKind::Enemy, RoomKind::Treasure, RoomKind::Stairway]
    );
    assert_eq!(session.enemy_sprite(0).unwrap(), "images/imp.png");

    // floor 1: fight the imp
    let outcome = session.enter_first_room().unwrap();
    assert!(matches!(outcome, InteractionOutcome::EncounterStarted { defeated: false, .. }));
    assert!(!session.attack_enemy(0).unwrap().defeated);
    session.attack_player(0).unwrap();
    assert_eq!(session.player_health(), 37.0);
    assert!(session.attack_enemy(0).unwrap().defeated);
    assert_eq!(session.player_health(), 40.0);

    // chest holds the flame sword
    session.change_room(Direction::Right).unwrap();
    assert_eq!(session.treasure_weapon(1).unwrap().unwrap().name, "Flame Sword");
    let reward = session.open_treasure(1).unwrap();
    assert!(matches!(reward, TreasureReward::Weapon { evicted: None, .. }));
    assert_eq!(session.open_treasure(1).unwrap(), TreasureReward::AlreadyOpened);
    assert_eq!(session.player_weapons().len(), 2);
    session.select_weapon(1).unwrap();
    assert_eq!(session.active_attack_effect(), Some("effects/fire.png"));

    // stairway
    session.change_room(Direction::Right).unwrap();
    session.confirm_stairway().unwrap();
    assert_eq!(session.level(), 2);
    assert_eq!(
        session.floor().kinds(),
        vec![RoomKind::Stairway, RoomKind::Trap, RoomKind::Empty]
    );

    // floor 2: trap for 1.5 * 2
    let outcome = session.change_room(Direction::Right).unwrap();
    assert_eq!(
        outcome,
        InteractionOutcome::TrapTriggered {
            damage: 3.0,
            player_health: 37.0
        }
    );
    session.heal(3.0);
    assert_eq!(session.player_health(), 40.0);
    session.enter_room(0).unwrap();
    session.go_to_next_floor().unwrap();

    // floor 3: boss
    assert!(session.is_boss_time());
    assert_eq!(session.floor().len(), 1);
    assert_eq!(session.enemy_sprite(0).unwrap(), "images/golem.png");
    while !session.is_victory() {
        session.attack_enemy(0).unwrap();
    }
    assert!(!session.is_game_over());
    assert!(matches!(session.confirm_stairway(), Err(TowerError::NotOnStairway)));
    assert!(matches!(session.go_to_next_floor(), Err(TowerError::TowerCompleted)));
}

#[test]
fn test_player_can_fall() {
    let mut rng = ScriptedRng::default();
    // stairs at 1, room 0 holds the golem (target 5)
    rng.push_unit(0.0).push_int(1);
    rng.push_unit(0.0).push_int(4);

    let mut session = GameSession::new(catalog(), config(2), rng).unwrap();
    session.enter_first_room().unwrap();
    for _ in 0..4 {
        session.attack_player(0).unwrap();
    }
    assert!(session.is_game_over());
    assert_eq!(session.player().displayed_health(), 0.0);

    session.reset_player_health();
    assert!(!session.is_game_over());
}

#[test]
fn test_stairway_reentry_changes_nothing() {
    let rng = ScriptedRng::new([0.0], [0]);
    let mut session = GameSession::new(catalog(), config(1), rng).unwrap();
    for _ in 0..3 {
        assert_eq!(
            session.enter_room(0).unwrap(),
            InteractionOutcome::StairwayReached
        );
    }
    assert_eq!(session.level(), 1);
    assert_eq!(session.player_health(), 40.0);
}

#[test]
fn test_bad_indices_rejected() {
    let rng = ScriptedRng::new([0.0], [0]);
    let mut session = GameSession::new(catalog(), config(2), rng).unwrap();
    assert!(matches!(
        session.enter_room(2),
        Err(TowerError::RoomIndexOutOfRange { index: 2, len: 2 })
    ));
    assert!(matches!(
        session.open_treasure(5),
        Err(TowerError::RoomIndexOutOfRange { .. })
    ));
    assert!(matches!(
        session.select_weapon(0),
        Err(TowerError::WeaponIndexOutOfRange { .. })
    ));
}

#[test]
fn test_invalid_config_rejected() {
    let rng = ScriptedRng::default();
    let result = GameSession::new(catalog(), config(0), rng);
    assert!(matches!(result, Err(TowerError::Config(_))));
}
