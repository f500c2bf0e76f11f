#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless command-line runner for the toroidal Game of Life.
//!
//! Replaces the original GUI shell: reads the configuration file, seeds the
//! engine from an optional board document, auto-plays toward the configured
//! tick ceiling, reports per-tick statistics, and saves snapshot ranges
//! through the persistence adapter.

mod config;

use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use game_of_life_core::{GridDimensions, Tick};
use game_of_life_engine::{query, Advance, Simulation};
use game_of_life_persistence::{encode_board, load_seed, SnapshotStore};

use crate::config::RunConfig;

/// Command-line arguments accepted by the runner.
#[derive(Debug, Parser)]
#[command(name = "game-of-life", about = "Toroidal Game of Life simulator")]
struct Args {
    /// Path to the five-line configuration file.
    #[arg(long, default_value = "config.txt")]
    config: PathBuf,

    /// Board document loaded into generation 0 before the run.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Number of generations to advance (defaults to the configured maximum).
    #[arg(long)]
    ticks: Option<u32>,

    /// Inclusive tick range to write as snapshot files.
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    save: Option<Vec<u32>>,

    /// Print each generation's board as well as its statistics.
    #[arg(long)]
    boards: bool,
}

/// Entry point for the Game of Life command-line interface.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = RunConfig::load_or_create(&args.config)?;
    let dims = GridDimensions::new(config.rows, config.cols)?;
    let mut sim = Simulation::new(dims, Some(Tick::new(config.max_ticks)));

    if let Some(path) = &args.seed {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading seed board {}", path.display()))?;
        load_seed(&mut sim, &text)
            .with_context(|| format!("loading seed board {}", path.display()))?;
    }

    report(&sim, Tick::ZERO, args.boards)?;

    let requested = args.ticks.unwrap_or(config.max_ticks);
    for _ in 0..requested {
        match sim.advance() {
            Advance::Advanced(tick) => report(&sim, tick, args.boards)?,
            Advance::AtCeiling(tick) => {
                println!("tick ceiling {tick} reached");
                break;
            }
        }
    }

    if let Some(range) = &args.save {
        let (start, end) = (Tick::new(range[0]), Tick::new(range[1]));
        let store = SnapshotStore::new(config.folder_pattern.as_str(), config.file_pattern.as_str());
        let written = store
            .write_range(&sim, start, end)
            .context("writing snapshot range")?;
        println!(
            "wrote {} snapshots to {}",
            written.len(),
            store.folder().display()
        );
    }

    Ok(())
}

fn report(sim: &Simulation, tick: Tick, boards: bool) -> anyhow::Result<()> {
    let stats = query::statistics(sim, tick)?;
    println!("tick {tick}: {} alive, {} dead", stats.alive, stats.dead);
    if boards {
        print!("{}", encode_board(&query::generation(sim, tick)?));
    }
    Ok(())
}
