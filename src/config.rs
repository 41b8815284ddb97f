/// Tunables and per-session configuration.

use std::time::Duration;

use anyhow::{bail, Result};

// ── Gameplay constants ───────────────────────────────────────────────────────

pub const DEFAULT_CANVAS_WIDTH: f64 = 500.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 500.0;

/// 25 ticks per second.
pub const DEFAULT_TICK: Duration = Duration::from_millis(40);

pub const ENEMY_SPAWN_INTERVAL: u64 = 100;
pub const UPGRADE_SPAWN_INTERVAL: u64 = 75;
/// Pointer scheme only: automatic fire cadence.
pub const AUTO_FIRE_INTERVAL: u64 = 25;

pub const INITIAL_ENEMIES: usize = 3;

pub const PLAYER_HP: u32 = 10;
pub const PLAYER_ATTACK_SPEED: u32 = 1;
pub const PLAYER_SIZE: f64 = 20.0;
pub const PLAYER_START_X: f64 = 50.0;
pub const PLAYER_START_Y: f64 = 40.0;
/// Distance moved per tick while a direction flag is set.
pub const PLAYER_STEP: f64 = 10.0;

/// Click fires only once the counter has strictly exceeded this.
pub const ATTACK_GATE: u32 = 25;

/// Centre distance below which player contact counts, regardless of size.
pub const COLLISION_RADIUS: f64 = 30.0;

pub const ENEMY_MIN_SIZE: f64 = 10.0;
pub const ENEMY_MAX_SIZE: f64 = 40.0;
pub const ENEMY_MIN_SPEED: f64 = 5.0;
pub const ENEMY_MAX_SPEED: f64 = 10.0;

pub const UPGRADE_SIZE: f64 = 10.0;
pub const UPGRADE_SCORE_BONUS: u32 = 100;

pub const BULLET_SIZE: f64 = 10.0;
pub const BULLET_SPEED: f64 = 5.0;
/// Bullets whose timer exceeds this are discarded.
pub const BULLET_LIFETIME: u32 = 100;

// ── Control scheme ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ControlScheme {
    /// Player follows the pointer; bullets fire automatically.
    Pointer,
    /// Player steps on direction keys; bullets fire on click.
    Directional,
}

// ── Session configuration ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tick: Duration,
    pub scheme: ControlScheme,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            tick: DEFAULT_TICK,
            scheme: ControlScheme::Directional,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.canvas_width), ("height", self.canvas_height)] {
            if !value.is_finite() {
                bail!("canvas {name} must be finite, got {value}");
            }
            if value < PLAYER_SIZE {
                bail!("canvas {name} must be at least {PLAYER_SIZE}, got {value}");
            }
        }
        if self.tick.is_zero() {
            bail!("tick period must be > 0");
        }
        Ok(())
    }
}
