/// Game start, game over, restart.

use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::config::{GameConfig, INITIAL_ENEMIES};
use crate::entities::GameState;
use crate::spawner::spawn_enemy;

/// Summary of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub survived_ms: u64,
    pub score: u32,
    pub frames: u64,
}

/// Build the first game of a session.
pub fn init_state(config: GameConfig, rng: &mut impl Rng, now: Instant) -> GameState {
    let mut state = GameState::empty(config, now);
    populate(&mut state, rng);
    info!(scheme = ?config.scheme, "new game");
    state
}

/// Fresh world with the same configuration.
///
/// The reset is total: hp, position, attack speed, attack counter and movement
/// flags all return to their defaults along with score, frame count and every
/// entity mapping.  Ids keep counting up so a handle from the previous game never
/// aliases a new entity.
pub fn start_new_game(state: &GameState, rng: &mut impl Rng, now: Instant) -> GameState {
    let mut next = GameState::empty(state.config, now);
    next.next_id = state.next_id;
    populate(&mut next, rng);
    info!("new game");
    next
}

/// Report the run that just ended and restart.
pub fn finish_game(state: &GameState, rng: &mut impl Rng, now: Instant) -> (GameState, GameOver) {
    let survived_ms = now.saturating_duration_since(state.started_at).as_millis() as u64;
    let report = GameOver { survived_ms, score: state.score, frames: state.frame };

    info!("You died");
    info!(score = report.score, "You survived for {} ms", report.survived_ms);

    (start_new_game(state, rng, now), report)
}

fn populate(state: &mut GameState, rng: &mut impl Rng) {
    for _ in 0..INITIAL_ENEMIES {
        spawn_enemy(state, rng);
    }
}
