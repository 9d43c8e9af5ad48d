//! Headless demo climb.
//!
//! Usage: `tower-climb [session.ron|session.json]`
//!
//! Walks every room of every floor left to right, fights whatever it meets,
//! opens every chest and climbs at the stairway until the boss falls or the
//! player does.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use tower_core::logging::{init_tracing, TimingSpan};
use tower_core::room::{InteractionOutcome, RoomKind};
use tower_core::{
    Attack, Catalog, Direction, Enemy, FloorDefinition, GameSession, LevelRange, SessionConfig,
    Weapon,
};

/// Upper bound on exchanged blows per encounter so a zero-damage matchup ends
const MAX_EXCHANGES: u32 = 200;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => SessionConfig::default(),
    };
    init_tracing(&config.tracing);

    let catalog = Arc::new(demo_catalog().context("building demo catalog")?);
    catalog.verify_coverage().context("demo catalog coverage")?;

    let _timing = TimingSpan::new("climb");
    let mut session = GameSession::from_config(catalog, config)?;
    session.add_weapon(Weapon::new("Rusty Sword", 1, Attack::new("Slash", 6.0)));

    loop {
        clear_floor(&mut session)?;
        if session.is_game_over() {
            info!(level = session.level(), "the tower claims another climber");
            break;
        }
        if session.is_victory() {
            info!(
                level = session.level(),
                xp = session.player_experience(),
                "boss defeated, tower cleared"
            );
            break;
        }

        let Some(stairs) = session.floor().stairway_index() else {
            bail!("floor {} has no stairway", session.level());
        };
        session.enter_room(stairs)?;
        session.confirm_stairway()?;
    }

    println!(
        "level {} | health {:.1} | xp {} | weapons {:?}",
        session.level(),
        session.player().displayed_health(),
        session.player_experience(),
        session
            .player_weapons()
            .iter()
            .map(|w| w.name.as_str())
            .collect::<Vec<_>>()
    );
    Ok(())
}

fn clear_floor(session: &mut GameSession) -> Result<()> {
    let rooms = session.floor().len();
    let mut outcome = session.enter_first_room()?;
    for step in 0..rooms {
        let index = session.player().current_room();
        match outcome {
            InteractionOutcome::EncounterStarted { defeated: false, .. } => {
                fight(session, index)?;
            }
            InteractionOutcome::TreasureFound { opened: false } => {
                let reward = session.open_treasure(index)?;
                info!(index, ?reward, "chest opened");
            }
            InteractionOutcome::TrapTriggered { damage, .. } => {
                info!(index, damage, "trap sprung");
            }
            _ => {}
        }
        if session.is_game_over() || session.is_victory() {
            return Ok(());
        }
        if step + 1 < rooms {
            outcome = session.change_room(Direction::Right)?;
        }
    }
    Ok(())
}

fn fight(session: &mut GameSession, index: usize) -> Result<()> {
    if session.floor().room(index)?.kind() != RoomKind::Enemy {
        return Ok(());
    }
    for _ in 0..MAX_EXCHANGES {
        if session.attack_enemy(index)?.defeated {
            return Ok(());
        }
        if session.attack_player(index)?.defeated {
            return Ok(());
        }
    }
    info!(index, "stalemate, moving on");
    Ok(())
}

fn demo_catalog() -> tower_core::TowerResult<Catalog> {
    let slime = Enemy::new("Slime", 12.0, 1, vec![Attack::new("Ooze", 2.0)])
        .with_multiplier("Slash", 1.5)
        .with_sprite("images/slime.png");
    let goblin = Enemy::new("Goblin", 25.0, 3, vec![Attack::new("Stab", 4.0)])
        .with_sprite("images/goblin.png");
    let skeleton = Enemy::new("Skeleton", 40.0, 6, vec![Attack::new("Slash", 6.0)])
        .with_multiplier("Crush", 2.0)
        .with_multiplier("Slash", 0.5)
        .with_sprite("images/skeleton.png");
    let wraith = Enemy::new("Wraith", 70.0, 12, vec![Attack::new("Drain", 9.0)])
        .with_multiplier("Fire", 2.0)
        .with_sprite("images/wraith.png");

    let floors = vec![
        FloorDefinition::new("Dungeon", "images/dungeon.png", LevelRange::new(1, 3))
            .with_enemies([slime.clone(), goblin.clone()])
            .with_weapons([Weapon::new("Mace", 2, Attack::new("Crush", 9.0))])
            .with_spawn_weight(3)
            .with_visibility(0.6),
        FloorDefinition::new("Sewers", "images/sewers.png", LevelRange::new(2, 4))
            .with_enemies([slime, goblin.clone(), skeleton.clone()])
            .with_visibility(0.4),
        FloorDefinition::new("Crypt", "images/crypt.png", LevelRange::new(4, 6))
            .with_enemies([goblin, skeleton, wraith])
            .with_weapons([
                Weapon::new("Torch Blade", 4, Attack::new("Fire", 14.0)),
                Weapon::new("War Hammer", 5, Attack::new("Crush", 16.0)),
            ])
            .with_spawn_weight(2)
            .with_visibility(0.8),
    ];

    Ok(Catalog::new("Demo Tower", "A short climb for smoke testing", 6, floors)?
        .with_attack_effect("Slash", "effects/slash.png")
        .with_attack_effect("Crush", "effects/crush.png")
        .with_attack_effect("Fire", "effects/fire.png"))
}
