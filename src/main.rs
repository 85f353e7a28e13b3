//! Terminal runner (default binary).
//!
//! Owns the three things the engine deliberately does not: the tick timer,
//! the keyboard and the screen. Every key press becomes one engine call, every
//! elapsed interval becomes one `tick`, and the screen is redrawn from a fresh
//! snapshot after each.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};

use blockfall::core::{EngineConfig, GameSnapshot, GameState, PieceSpawner};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle in the terminal")]
struct Cli {
    #[arg(long, default_value_t = BOARD_WIDTH, help = "Board width in cells")]
    width: u8,

    #[arg(long, default_value_t = BOARD_HEIGHT, help = "Board height in cells")]
    height: u8,

    #[arg(long, default_value_t = TICK_MS, help = "Milliseconds between gravity ticks")]
    tick_ms: u32,

    #[arg(long, help = "Seed for the piece sequence (random if omitted)")]
    seed: Option<u64>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)")]
    verbose: u8,

    #[arg(long, help = "Write logs to this file (the terminal is busy with the game)")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = EngineConfig::with_size(cli.width, cli.height);
    let spawner = match cli.seed {
        Some(seed) => PieceSpawner::new(seed),
        None => PieceSpawner::from_entropy(),
    };
    let mut game = GameState::with_config(config, spawner).context("invalid board settings")?;
    let tick = Duration::from_millis(cli.tick_ms.max(1) as u64);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, tick);

    // Always try to restore terminal state.
    let _ = term.exit();
    println!("score: {}", game.score());
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .init();
    info!(%level, "logging initialized");
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    game.start_new_game();
    info!(seed = ?game.seed(), "session started");
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        if action == GameAction::NewGame {
                            info!(seed = ?game.seed(), "session started");
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity stops by itself once the session is over.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.tick();
        }
    }
}
