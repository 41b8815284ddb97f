/// The per-frame simulation step.
///
/// `tick` takes an immutable reference to the current `GameState` (plus an RNG
/// handle and the current time) and returns a brand-new `GameState`.  Side effects
/// are limited to the injected RNG and log output.

use std::time::Instant;

use rand::Rng;
use tracing::debug;

use crate::config::{
    ControlScheme, AUTO_FIRE_INTERVAL, BULLET_LIFETIME, ENEMY_SPAWN_INTERVAL, PLAYER_STEP,
    UPGRADE_SCORE_BONUS, UPGRADE_SPAWN_INTERVAL,
};
use crate::entities::{EntityId, GameState, UpgradeKind};
use crate::geometry::{clamp_into, has_collided, test_collision_entity, update_position};
use crate::input::apply_movement;
use crate::lifecycle::{finish_game, GameOver};
use crate::spawner::{spawn_bullet, spawn_enemy, spawn_upgrade};

/// What one tick produced.
#[derive(Clone, Debug)]
pub struct TickOutcome {
    pub state: GameState,
    /// Set when the player died this tick; `state` is then already a fresh game.
    pub game_over: Option<GameOver>,
}

/// Advance the simulation by one frame.
pub fn tick(state: &GameState, rng: &mut impl Rng, now: Instant) -> TickOutcome {
    let mut next = state.clone();
    let (width, height) = (next.config.canvas_width, next.config.canvas_height);
    let scheme = next.config.scheme;

    // ── 1. Survival counters ─────────────────────────────────────────────────
    next.frame += 1;
    next.score += 1;

    // ── 2. Timed spawns ──────────────────────────────────────────────────────
    if next.frame % ENEMY_SPAWN_INTERVAL == 0 {
        spawn_enemy(&mut next, rng);
    }
    if next.frame % UPGRADE_SPAWN_INTERVAL == 0 {
        spawn_upgrade(&mut next, rng);
    }
    if scheme == ControlScheme::Pointer && next.frame % AUTO_FIRE_INTERVAL == 0 {
        spawn_bullet(&mut next, rng);
    }

    // ── 3. Fire-rate accumulator ─────────────────────────────────────────────
    if scheme == ControlScheme::Directional {
        next.player.attack_counter =
            next.player.attack_counter.saturating_add(next.player.attack_speed);
    }

    // ── 4. Upgrades ↔ player ─────────────────────────────────────────────────
    let upgrade_ids: Vec<EntityId> = next.upgrades.keys().copied().collect();
    for id in upgrade_ids {
        let Some(upgrade) = next.upgrades.get_mut(&id) else {
            continue;
        };
        update_position(&mut upgrade.body, width, height);
        if !has_collided(&next.player.body, &upgrade.body) {
            continue;
        }
        let kind = upgrade.kind;
        next.upgrades.remove(&id);
        match kind {
            UpgradeKind::Score => next.score += UPGRADE_SCORE_BONUS,
            UpgradeKind::AttackSpeed => next.player.attack_speed += 1,
        }
        debug!(id, ?kind, "upgrade collected");
    }

    // ── 5. Bullets: move, expire, hit at most one enemy each ─────────────────
    let bullet_ids: Vec<EntityId> = next.bullets.keys().copied().collect();
    for id in bullet_ids {
        let Some(bullet) = next.bullets.get_mut(&id) else {
            continue;
        };
        update_position(&mut bullet.body, width, height);
        bullet.timer += 1;
        if bullet.timer > BULLET_LIFETIME {
            next.bullets.remove(&id);
            continue;
        }

        let body = bullet.body;
        let victim = next
            .enemies
            .iter()
            .find(|(_, enemy)| test_collision_entity(&body, &enemy.body))
            .map(|(&enemy_id, _)| enemy_id);
        if let Some(enemy_id) = victim {
            next.bullets.remove(&id);
            next.enemies.remove(&enemy_id);
            debug!(bullet = id, enemy = enemy_id, "enemy destroyed");
        }
    }

    // ── 6. Player ────────────────────────────────────────────────────────────
    match scheme {
        ControlScheme::Directional => apply_movement(&mut next.player, PLAYER_STEP, width, height),
        ControlScheme::Pointer => clamp_into(&mut next.player.body, width, height),
    }

    // ── 7. Enemies ↔ player ──────────────────────────────────────────────────
    let mut hits = 0;
    for enemy in next.enemies.values_mut() {
        update_position(&mut enemy.body, width, height);
        if has_collided(&next.player.body, &enemy.body) {
            hits += 1;
        }
    }
    next.player.hp = next.player.hp.saturating_sub(hits);

    // ── 8. Terminal condition ────────────────────────────────────────────────
    if next.player.hp == 0 {
        let (state, report) = finish_game(&next, rng, now);
        return TickOutcome { state, game_over: Some(report) };
    }

    TickOutcome { state: next, game_over: None }
}
