//! Terminal runner (default binary).
//!
//! Polls input, advances the engine by measured wall-clock time and redraws
//! through the framebuffer renderer at roughly 60 frames per second.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::{info, warn};

use termv::core::{Game, GameSnapshot};
use termv::input::{poll_frame, FrameInput, InputEvent, SoftDropLatch};
use termv::term::{FrameBuffer, GameView, TerminalRenderer, ThemeKind, Viewport};
use termv::types::{GameAction, GameStatus, TICK_MS};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Options {
    /// Randomizer seed; defaults to the current UNIX time.
    seed: Option<u32>,

    /// Starting colour theme (pastel, retro or matrix); `t` cycles in game.
    #[arg(long, default_value_t = ThemeKind::Pastel)]
    theme: ThemeKind,

    /// Log filter, e.g. `debug` or `termv_core=trace`. Falls back to RUST_LOG, then `warn`.
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for the log file; defaults to the system temp directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let options = Options::parse();
    let _logger = init_logger(&options)?;

    let seed = options.seed.unwrap_or_else(seed_from_clock);
    info!("starting with seed {} and theme {}", seed, options.theme);

    let mut game = Game::new(seed);
    let mut term = TerminalRenderer::new();

    let result = term
        .enter()
        .and_then(|()| run(&mut term, &mut game, options.theme));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {:#}", err);
    }
    result?;

    println!(
        "Game Over! Score: {} | Lines: {} | Level: {}",
        game.score(),
        game.lines(),
        game.level()
    );
    Ok(())
}

/// Log to a file; the terminal itself is busy with the game.
fn init_logger(options: &Options) -> Result<LoggerHandle> {
    let logger = match &options.log_level {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str("warn")?,
    };
    let dir = options.log_dir.clone().unwrap_or_else(std::env::temp_dir);
    let handle = logger
        .log_to_file(FileSpec::default().directory(dir).basename("termv"))
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    Ok(handle)
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, game: &mut Game, mut theme: ThemeKind) -> Result<()> {
    info!("key release events: {}", term.reports_key_releases());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut input = FrameInput::new();
    let mut latch = SoftDropLatch::new();

    let frame = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        let dt_ms = now.duration_since(last_tick).as_secs_f64() * 1000.0;
        last_tick = now;

        for event in input.drain(..) {
            match event {
                InputEvent::CycleTheme => {
                    theme = theme.next();
                    info!("theme {}", theme.name());
                }
                InputEvent::Action(action) => {
                    match action {
                        GameAction::SoftDrop => {
                            latch.press();
                        }
                        GameAction::SoftDropRelease => latch.release(),
                        _ => {}
                    }
                    game.apply_action(action);
                }
            }
        }

        if latch.update(dt_ms) {
            game.set_soft_drop(false);
        }

        game.tick(dt_ms);
        if game.status() == GameStatus::Quit {
            return Ok(());
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, theme.theme(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(now.elapsed());
        if poll_frame(timeout, &mut input)? {
            term.invalidate();
        }
    }
}
