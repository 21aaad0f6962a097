//! # Lottery Ticket
//!
//! Terminal lottery ticket game. Draw three digits until they add up to ten,
//! then drag the winning ticket aside to read what is written behind it.
//!
//! ## Features
//! - Click "New Ticket" (or press n / Space / Enter) to draw again
//! - Synthesized click and victory sounds
//! - Drag-and-drop of the winning ticket with the mouse
//!
//! ## Usage
//! Run with `cargo run --release`; pass `--mute` for silence and `--seed` for
//! a reproducible sequence of tickets.

mod app;
mod tui;

use app::App;
use clap::Parser;
use lottery::{audio, LotteryError, TicketGenerator};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the ticket generator (random when omitted)
    #[clap(short, long)]
    seed: Option<u64>,

    /// Play no sounds
    #[clap(short, long, action = clap::ArgAction::SetTrue)]
    mute: bool,

    /// Input poll timeout and animation tick, in milliseconds
    #[clap(long, default_value_t = 100)]
    tick_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[clap(long)]
    log_file: Option<PathBuf>,
}

/// Installs a file-backed subscriber; without a file nothing is logged, since
/// anything written to the terminal would tear through the UI.
fn init_logging(path: Option<&Path>) -> Result<(), LotteryError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), LotteryError> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, muted = args.mute, "starting");

    let audio = audio::open_backend(args.mute);
    let mut app = App::new(TicketGenerator::seeded(seed), audio);
    tui::run(&mut app, Duration::from_millis(args.tick_ms.max(1)))?;

    tracing::info!(attempts = app.widget.attempts(), won = app.widget.is_won(), "bye");
    Ok(())
}
