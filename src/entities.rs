/// All game entity types — pure data, no logic.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

use crate::config::{
    GameConfig, PLAYER_ATTACK_SPEED, PLAYER_HP, PLAYER_SIZE, PLAYER_START_X, PLAYER_START_Y,
};

/// Handle for a spawned entity.  Allocated by `GameState::allocate_id` and never reused
/// within a session.
pub type EntityId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Orange,
    LightGreen,
    Black,
}

impl Color {
    /// CSS colour keyword.
    pub fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::LightGreen => "lightgreen",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Shared kinematics ─────────────────────────────────────────────────────────

/// Position, velocity and a bounding box centred on `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Body {
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Body { x, y, speed_x: 0.0, speed_y: 0.0, width, height }
    }

    pub fn with_speed(self, speed_x: f64, speed_y: f64) -> Self {
        Body { speed_x, speed_y, ..self }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Directional intent, toggled by key press/release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    pub hp: u32,
    /// Added to `attack_counter` every tick.
    pub attack_speed: u32,
    pub attack_counter: u32,
    pub movement: Movement,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            body: Body::at(PLAYER_START_X, PLAYER_START_Y, PLAYER_SIZE, PLAYER_SIZE),
            hp: PLAYER_HP,
            attack_speed: PLAYER_ATTACK_SPEED,
            attack_counter: 0,
            movement: Movement::default(),
        }
    }
}

// ── Hostiles & pickups ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeKind {
    /// +100 score.
    Score,
    /// +1 attack speed for the rest of the session.
    AttackSpeed,
}

impl UpgradeKind {
    pub fn color(self) -> Color {
        match self {
            UpgradeKind::Score => Color::Orange,
            UpgradeKind::AttackSpeed => Color::LightGreen,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub body: Body,
    pub kind: UpgradeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub body: Body,
    /// Frames alive.
    pub timer: u32,
}

// ── Borrowed view over any entity ────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Bullet(&'a Bullet),
    Upgrade(&'a Upgrade),
}

impl<'a> EntityRef<'a> {
    pub fn body(&self) -> &'a Body {
        match self {
            EntityRef::Player(p) => &p.body,
            EntityRef::Enemy(e) => &e.body,
            EntityRef::Bullet(b) => &b.body,
            EntityRef::Upgrade(u) => &u.body,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            EntityRef::Player(_) => Color::Green,
            EntityRef::Enemy(e) => e.color,
            EntityRef::Bullet(_) => Color::Black,
            EntityRef::Upgrade(u) => u.kind.color(),
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire world.  Cloneable so pure update functions can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub enemies: BTreeMap<EntityId, Enemy>,
    pub upgrades: BTreeMap<EntityId, Upgrade>,
    pub bullets: BTreeMap<EntityId, Bullet>,
    /// Ticks since the current game started.
    pub frame: u64,
    pub score: u32,
    pub started_at: Instant,
    pub next_id: EntityId,
}

impl GameState {
    /// An empty world: default player, no entities, counters at zero.
    pub fn empty(config: GameConfig, now: Instant) -> Self {
        GameState {
            config,
            player: Player::default(),
            enemies: BTreeMap::new(),
            upgrades: BTreeMap::new(),
            bullets: BTreeMap::new(),
            frame: 0,
            score: 0,
            started_at: now,
            next_id: 0,
        }
    }

    pub fn allocate_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
