//! Gridplay: board game rule engines behind a text protocol.
//!
//! ## Usage
//!
//! - `gridplay` - Show a demo
//! - `gridplay play --variant go --size 9` - Start the command loop
//! - `gridplay demo` - Play a short automated game of each variant

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gridplay::constants::{
    CAPTURE_LIBERTY_DEFAULT_SIZE, FIVE_IN_ROW_DEFAULT_SIZE, LINE_FLIP_DEFAULT_SIZE, MIN_SIZE,
};
use gridplay::engine::Variant;
use gridplay::game::Game;
use gridplay::protocol::ProtocolEngine;
use gridplay::selector::SelectorKind;
use gridplay::session::Session;

/// Gridplay: rule engines for five-in-a-row, capture and line-flip games
#[derive(Parser)]
#[command(name = "gridplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text command loop on stdin/stdout
    Play {
        /// five-in-row, capture-liberty or line-flip (gomoku, go, othello)
        #[arg(long, default_value = "five-in-row")]
        variant: Variant,

        /// Board side, 8 to 19; defaults to the variant's usual size
        #[arg(long)]
        size: Option<usize>,

        /// Move selector used by `genmove`: random or heuristic
        #[arg(long, default_value = "random")]
        ai: SelectorKind,

        /// Seed for the move selector
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a short automated game of each variant
    Demo {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn default_size(variant: Variant) -> usize {
    match variant {
        Variant::FiveInRow => FIVE_IN_ROW_DEFAULT_SIZE,
        Variant::CaptureLiberty => CAPTURE_LIBERTY_DEFAULT_SIZE,
        Variant::LineFlip => LINE_FLIP_DEFAULT_SIZE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Play {
            variant,
            size,
            ai,
            seed,
        }) => {
            let game = Game::new(variant, size.unwrap_or_else(|| default_size(variant)))?;
            let mut engine = ProtocolEngine::new(game, ai.build(seed))?;
            engine.run()?;
        }
        Some(Commands::Demo { seed }) => run_demo(seed)?,
        None => run_demo(None)?,
    }
    Ok(())
}

fn run_demo(seed: Option<u64>) -> Result<()> {
    println!("Gridplay: board game rule engines\n");

    for variant in Variant::ALL {
        println!("=== {variant} ===");
        let mut session = Session::new(Game::new(variant, MIN_SIZE)?)?;
        let mut selector = SelectorKind::Heuristic.build(seed);
        let mut turns = 0;
        while !session.status().is_over() && turns < 40 {
            session.select_and_play(selector.as_mut())?;
            turns += 1;
        }
        let game = session.game();
        println!("{}", game.board());
        println!(
            "After {turns} turns: {} (undo depth {})\n",
            session.status(),
            game.history_len()
        );
    }
    Ok(())
}
