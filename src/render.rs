/// Backend-independent frame description.
///
/// `frame_for` translates state into an ordered list of draw requests.  No game
/// logic is performed; a host replays the commands onto whatever surface it owns.

use crate::entities::{Color, EntityRef, GameState};
use crate::geometry::Rect;

pub const HP_TEXT_POS: (f64, f64) = (0.0, 30.0);
pub const SCORE_TEXT_POS: (f64, f64) = (200.0, 30.0);

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole canvas.
    Clear,
    FillRect { rect: Rect, color: Color },
    /// `(x, y)` is the text baseline origin.
    Text { text: String, x: f64, y: f64 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn fill(&mut self, entity: EntityRef<'_>) {
        self.commands.push(DrawCommand::FillRect {
            rect: Rect::of(entity.body()),
            color: entity.color(),
        });
    }

    fn text(&mut self, text: String, (x, y): (f64, f64)) {
        self.commands.push(DrawCommand::Text { text, x, y });
    }
}

pub fn hp_label(state: &GameState) -> String {
    format!("{} HP", state.player.hp)
}

pub fn score_label(state: &GameState) -> String {
    format!("Score: {}", state.score)
}

/// Clear, then upgrades, bullets, the player, the HUD and finally enemies, so
/// enemies paint over everything else.
pub fn frame_for(state: &GameState) -> Frame {
    let mut frame = Frame::default();
    frame.commands.push(DrawCommand::Clear);

    for upgrade in state.upgrades.values() {
        frame.fill(EntityRef::Upgrade(upgrade));
    }
    for bullet in state.bullets.values() {
        frame.fill(EntityRef::Bullet(bullet));
    }
    frame.fill(EntityRef::Player(&state.player));
    frame.text(hp_label(state), HP_TEXT_POS);
    frame.text(score_label(state), SCORE_TEXT_POS);
    for enemy in state.enemies.values() {
        frame.fill(EntityRef::Enemy(enemy));
    }

    frame
}
