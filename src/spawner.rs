/// Procedural generation of enemies, upgrades and bullets.
///
/// Each generator inserts one entity under a fresh id and returns that id.
/// All randomness comes through the injected `rng`.

use std::f64::consts::TAU;

use rand::Rng;
use tracing::debug;

use crate::config::{
    BULLET_SIZE, BULLET_SPEED, ENEMY_MAX_SIZE, ENEMY_MAX_SPEED, ENEMY_MIN_SIZE, ENEMY_MIN_SPEED,
    UPGRADE_SIZE,
};
use crate::entities::{Body, Bullet, Color, Enemy, EntityId, GameState, Upgrade, UpgradeKind};

fn random_point(state: &GameState, rng: &mut impl Rng) -> (f64, f64) {
    let x = rng.gen::<f64>() * state.config.canvas_width;
    let y = rng.gen::<f64>() * state.config.canvas_height;
    (x, y)
}

/// Random placement and size; both speed components positive.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) -> EntityId {
    let (x, y) = random_point(state, rng);
    let width = rng.gen_range(ENEMY_MIN_SIZE..ENEMY_MAX_SIZE);
    let height = rng.gen_range(ENEMY_MIN_SIZE..ENEMY_MAX_SIZE);
    let speed_x = rng.gen_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
    let speed_y = rng.gen_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);

    let id = state.allocate_id();
    state.enemies.insert(
        id,
        Enemy {
            body: Body::at(x, y, width, height).with_speed(speed_x, speed_y),
            color: Color::Red,
        },
    );
    debug!(id, x, y, "enemy spawned");
    id
}

/// Stationary pickup; category is a coin flip.
pub fn spawn_upgrade(state: &mut GameState, rng: &mut impl Rng) -> EntityId {
    let (x, y) = random_point(state, rng);
    let kind = if rng.gen_bool(0.5) {
        UpgradeKind::Score
    } else {
        UpgradeKind::AttackSpeed
    };

    let id = state.allocate_id();
    state.upgrades.insert(
        id,
        Upgrade {
            body: Body::at(x, y, UPGRADE_SIZE, UPGRADE_SIZE),
            kind,
        },
    );
    debug!(id, ?kind, "upgrade spawned");
    id
}

/// Fired from the player's centre in a uniformly random direction.
pub fn spawn_bullet(state: &mut GameState, rng: &mut impl Rng) -> EntityId {
    let angle = rng.gen_range(0.0..TAU);
    let origin = state.player.body;

    let id = state.allocate_id();
    state.bullets.insert(
        id,
        Bullet {
            body: Body::at(origin.x, origin.y, BULLET_SIZE, BULLET_SIZE)
                .with_speed(angle.cos() * BULLET_SPEED, angle.sin() * BULLET_SPEED),
            timer: 0,
        },
    );
    id
}
