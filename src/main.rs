mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rect_survival::compute::tick;
use rect_survival::config::{ControlScheme, GameConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use rect_survival::entities::{Direction, GameState};
use rect_survival::input::{apply_input, direction_for_key, InputEvent};
use rect_survival::lifecycle::{init_state, GameOver};
use rect_survival::render::frame_for;
use rect_survival::viewport::Viewport;

/// Terminal arcade survival: dodge the red boxes, grab the pickups, shoot back.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// How the player is controlled.
    #[arg(long, value_enum, default_value_t = ControlScheme::Directional)]
    scheme: ControlScheme,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    width: f64,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    height: f64,

    /// Tick period in milliseconds.
    #[arg(long, default_value_t = 40)]
    tick_ms: u64,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Where log output goes; the terminal itself is the game screen.
    #[arg(long, default_value = "rect_survival.log")]
    log_file: PathBuf,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            canvas_width: self.width,
            canvas_height: self.height,
            tick: Duration::from_millis(self.tick_ms),
            scheme: self.scheme,
        }
    }
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Without key-release reporting a direction key counts as held while its last
/// press/repeat arrived within this many frames.  At 25 ticks/s that is 160 ms,
/// shorter than any OS repeat interval once repeat has started.
const HOLD_WINDOW: u64 = 4;

struct HeldKeys {
    last_seen: HashMap<Direction, u64>,
    /// Release events are reported, so keys never expire on their own.
    release_events: bool,
}

impl HeldKeys {
    fn new(release_events: bool) -> Self {
        HeldKeys { last_seen: HashMap::new(), release_events }
    }

    fn press(&mut self, direction: Direction, frame: u64) {
        self.last_seen.insert(direction, frame);
    }

    fn release(&mut self, direction: Direction) {
        self.last_seen.remove(&direction);
    }

    fn is_held(&self, direction: Direction, frame: u64) -> bool {
        self.last_seen
            .get(&direction)
            .map(|&last| self.release_events || frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Key events that bring the player's flags in line with what is held now.
    fn sync_events(&self, state: &GameState, frame: u64) -> Vec<InputEvent> {
        let flags = state.player.movement;
        [
            (Direction::Up, flags.up),
            (Direction::Down, flags.down),
            (Direction::Left, flags.left),
            (Direction::Right, flags.right),
        ]
        .into_iter()
        .filter_map(|(direction, set)| {
            let held = self.is_held(direction, frame);
            (held != set).then_some(InputEvent::Key { direction, pressed: held })
        })
        .collect()
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the user quits.
fn game_loop<W: Write>(
    out: &mut W,
    config: GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    release_events: bool,
) -> Result<()> {
    let (term_width, term_height) = terminal::size().context("failed to query terminal size")?;
    let mut view = Viewport::fit(term_width, term_height, config.canvas_width, config.canvas_height);

    let mut state = init_state(config, rng, Instant::now());
    let mut held = HeldKeys::new(release_events);
    let mut last_run: Option<GameOver> = None;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let input = match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    let quit = matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
                        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL));
                    if quit && kind == KeyEventKind::Press {
                        return Ok(());
                    }
                    match (direction_for_key(&code), kind) {
                        (Some(direction), KeyEventKind::Release) => {
                            held.release(direction);
                            None
                        }
                        (Some(direction), _) => {
                            held.press(direction, frame);
                            None
                        }
                        (None, KeyEventKind::Press) if code == KeyCode::Char(' ') => {
                            Some(InputEvent::Click)
                        }
                        _ => None,
                    }
                }
                Event::Mouse(MouseEvent { kind, column, row, .. }) => match kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        let (x, y) = view.to_canvas(column, row);
                        Some(InputEvent::PointerMove { x, y })
                    }
                    MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click),
                    _ => None,
                },
                Event::Resize(width, height) => {
                    view = Viewport::fit(width, height, config.canvas_width, config.canvas_height);
                    None
                }
                _ => None,
            };
            if let Some(input) = input {
                state = apply_input(&state, &input, rng);
            }
        }

        for input in held.sync_events(&state, frame) {
            state = apply_input(&state, &input, rng);
        }

        let outcome = tick(&state, rng, Instant::now());
        state = outcome.state;
        if let Some(report) = outcome.game_over {
            last_run = Some(report);
        }

        display::render(out, &frame_for(&state), &view, config.scheme, last_run.as_ref())?;

        let elapsed = frame_start.elapsed();
        if elapsed < config.tick {
            thread::sleep(config.tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.config();
    config.validate()?;
    init_logging(&args.log_file)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(?config, seed = ?args.seed, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, config, &mut rng, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting");
    result
}
