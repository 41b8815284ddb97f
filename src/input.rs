/// Input adapter: translates host events into player-intent state transitions.
///
/// Like the rest of the core these are pure — each takes the current state and
/// returns a new one.  Events that don't belong to the active control scheme are
/// ignored, so a host can forward everything it receives.

use crossterm::event::KeyCode;
use rand::Rng;

use crate::config::{ControlScheme, ATTACK_GATE};
use crate::entities::{Direction, GameState, Movement, Player};
use crate::geometry::clamp_into;
use crate::spawner::spawn_bullet;

/// A host event already translated into canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    Key { direction: Direction, pressed: bool },
    Click,
}

/// W/A/S/D (either case) and the arrow keys.
pub fn direction_for_key(code: &KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

pub fn apply_input(state: &GameState, event: &InputEvent, rng: &mut impl Rng) -> GameState {
    match (state.config.scheme, *event) {
        (ControlScheme::Pointer, InputEvent::PointerMove { x, y }) => move_player_to(state, x, y),
        (ControlScheme::Directional, InputEvent::Key { direction, pressed }) => {
            set_direction(state, direction, pressed)
        }
        (ControlScheme::Directional, InputEvent::Click) => player_shoot(state, rng),
        _ => state.clone(),
    }
}

/// Place the player at the pointer, clamped so its box stays on the canvas.
pub fn move_player_to(state: &GameState, x: f64, y: f64) -> GameState {
    let mut body = state.player.body;
    body.x = x;
    body.y = y;
    clamp_into(&mut body, state.config.canvas_width, state.config.canvas_height);
    GameState {
        player: Player { body, ..state.player.clone() },
        ..state.clone()
    }
}

pub fn set_direction(state: &GameState, direction: Direction, pressed: bool) -> GameState {
    let mut movement = state.player.movement;
    match direction {
        Direction::Up => movement.up = pressed,
        Direction::Down => movement.down = pressed,
        Direction::Left => movement.left = pressed,
        Direction::Right => movement.right = pressed,
    }
    GameState {
        player: Player { movement, ..state.player.clone() },
        ..state.clone()
    }
}

/// Fire once the attack counter has passed the gate; the counter then restarts.
/// Otherwise the state is returned unchanged.
pub fn player_shoot(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.player.attack_counter <= ATTACK_GATE {
        return state.clone();
    }
    let mut next = state.clone();
    spawn_bullet(&mut next, rng);
    next.player.attack_counter = 0;
    next
}

/// Shift the player one step along every set flag, then clamp into the canvas.
pub fn apply_movement(player: &mut Player, step: f64, canvas_width: f64, canvas_height: f64) {
    let Movement { up, down, left, right } = player.movement;
    if up {
        player.body.y -= step;
    }
    if down {
        player.body.y += step;
    }
    if left {
        player.body.x -= step;
    }
    if right {
        player.body.x += step;
    }
    clamp_into(&mut player.body, canvas_width, canvas_height);
}
