//! HandBlock runner (default binary).
//!
//! `handblock` (or `handblock play`) runs the game in the terminal using
//! crossterm for input and the framebuffer renderer from `handblock-term`.
//! `handblock simulate` drives the engine headlessly and prints JSON.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use handblock::config::{Cli, Commands, GameConfig};
use handblock::core::GameState;
use handblock::gravity::Gravity;
use handblock::input::{handle_key_event, should_quit, should_restart};
use handblock::observe::{parse_commands, run_script};
use handblock::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use handblock::types::{Command, TICK_MS};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::from_env().merge_cli(&cli);
    config.validate()?;
    init_logging(&config)?;

    match cli.command {
        Some(Commands::Simulate { commands, settle }) => simulate(&config, &commands, settle),
        Some(Commands::Play) | None => play(&config),
    }
}

/// Install a file logger when a log file is configured.
///
/// The terminal is in raw mode while playing, so nothing is logged to stdout
/// or stderr.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(config.log_level()))
        .init();
    Ok(())
}

fn simulate(config: &GameConfig, names: &[String], settle: bool) -> Result<()> {
    let commands = parse_commands(names)?;
    let seed = config.seed_or_clock();
    let mut game = GameState::new(config.cols, config.rows, seed)?;
    info!(seed, commands = commands.len(), "simulating");

    let observation = run_script(&mut game, &commands, settle);
    println!("{}", serde_json::to_string(&observation)?);
    Ok(())
}

fn play(config: &GameConfig) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let seed = config.seed_or_clock();
    info!(seed, cols = config.cols, rows = config.rows, "starting game");
    let mut game = GameState::new(config.cols, config.rows, seed)?;

    let view = GameView::default();
    let mut gravity = Gravity::new(config.fall_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = game.snapshot();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = game.score(), lines = game.lines(), "quit");
                        return Ok(());
                    }
                    if should_restart(key) {
                        let seed = game.source().seed();
                        info!(seed, "restart");
                        game = GameState::new(config.cols, config.rows, seed)?;
                        gravity.reset();
                        continue;
                    }
                    if let Some(command) = handle_key_event(key) {
                        let outcome = game.apply(command);
                        debug!(command = command.as_str(), applied = outcome.applied, "key");
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            if !snap.playable() {
                continue;
            }
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            for _ in 0..gravity.advance(elapsed_ms) {
                game.apply(Command::SoftDrop);
            }
        }
    }
}
