/// Rendering layer — all terminal I/O lives here.
///
/// Replays a `Frame` onto the terminal through a `Viewport`.  No game logic is
/// performed; this module only translates draw commands into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rect_survival::config::ControlScheme;
use rect_survival::entities;
use rect_survival::lifecycle::GameOver;
use rect_survival::render::{DrawCommand, Frame};
use rect_survival::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_LAST_RUN: Color = Color::Yellow;

fn terminal_color(color: entities::Color) -> Color {
    match color {
        entities::Color::Green => Color::DarkGreen,
        entities::Color::Red => Color::Red,
        entities::Color::Orange => Color::DarkYellow,
        entities::Color::LightGreen => Color::Green,
        // Dark terminals would hide true black.
        entities::Color::Black => Color::Grey,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    frame: &Frame,
    view: &Viewport,
    scheme: ControlScheme,
    last_run: Option<&GameOver>,
) -> std::io::Result<()> {
    for command in &frame.commands {
        match command {
            DrawCommand::Clear => {
                out.queue(terminal::Clear(terminal::ClearType::All))?;
                draw_border(out, view)?;
            }
            DrawCommand::FillRect { rect, color } => {
                fill_rect(out, view, rect.x, rect.y, rect.width, rect.height, *color)?;
            }
            DrawCommand::Text { text, x, y } => draw_text(out, view, text, *x, *y)?,
        }
    }

    draw_footer(out, view, scheme, last_run)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.origin_row + view.rows + 1))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let left = view.origin_col - 1;
    let right = view.origin_col + view.cols;
    let top = view.origin_row - 1;
    let bottom = view.origin_row + view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(left, top))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(left, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in view.origin_row..bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Draw commands ─────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: entities::Color,
) -> std::io::Result<()> {
    let Some(span) = view.cell_span(x, y, width, height) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(terminal_color(color)))?;
    let row_text = "█".repeat(span.cols as usize);
    for row in span.row..span.row + span.rows {
        out.queue(cursor::MoveTo(span.col, row))?;
        out.queue(Print(&row_text))?;
    }
    Ok(())
}

/// Text sits on the cell row just above its baseline.
fn draw_text<W: Write>(
    out: &mut W,
    view: &Viewport,
    text: &str,
    x: f64,
    y: f64,
) -> std::io::Result<()> {
    let baseline = (y - 1.0).max(0.0);
    let Some((col, row)) = view.to_cell(x, baseline) else {
        return Ok(());
    };
    let room = (view.origin_col + view.cols).saturating_sub(col) as usize;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print(text.chars().take(room).collect::<String>()))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_footer<W: Write>(
    out: &mut W,
    view: &Viewport,
    scheme: ControlScheme,
    last_run: Option<&GameOver>,
) -> std::io::Result<()> {
    let row = view.origin_row + view.rows + 1;
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    let hint = match scheme {
        ControlScheme::Pointer => "Mouse : Move   Q : Quit",
        ControlScheme::Directional => "↑↓←→ / WASD : Move   SPACE / Click : Shoot   Q : Quit",
    };
    out.queue(Print(hint))?;

    if let Some(run) = last_run {
        out.queue(style::SetForegroundColor(C_LAST_RUN))?;
        out.queue(Print(format!(
            "   Last run: {} ms, score {}",
            run.survived_ms, run.score
        )))?;
    }
    Ok(())
}
