//! Spell-cast search.
//!
//! Searches every spell sequence against the boss and prints the search
//! counters (`pending won lost`) followed by the least mana that wins.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p arena-client --bin wizard
//! cargo run -p arena-client --bin wizard -- --difficulty normal --show-path
//! ```

use std::path::PathBuf;

use anyhow::Result;
use arena_client::{ClientConfig, logging, output};
use clap::Parser;
use game_core::{Difficulty, GameConfig};

/// Find the cheapest winning spell sequence
#[derive(Parser, Debug)]
#[command(name = "wizard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML scenario (defaults to the built-in boss, or ARENA_SCENARIO)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// `hard` drains 1 hit point at the start of every player turn
    #[arg(long, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Explore every branch instead of pruning on mana spent
    #[arg(long)]
    no_prune: bool,

    /// Stop after expanding this many states
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Also print the winning spells
    #[arg(long)]
    show_path: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().with_scenario_path(cli.scenario);

    logging::setup_logging(&config.log_filter)?;

    let scenario = config.load_scenario()?;
    let mut search_config = GameConfig::new()
        .with_difficulty(cli.difficulty)
        .with_pruning(!cli.no_prune);
    if let Some(limit) = cli.max_expansions {
        search_config = search_config.with_max_expansions(limit);
    }

    tracing::info!(
        difficulty = %search_config.difficulty,
        prune = search_config.prune,
        "Searching spell sequences"
    );

    let report = game_core::search(scenario.wizard.battle(), &search_config);
    if report.pending > 0 {
        tracing::warn!(
            pending = report.pending,
            "Expansion budget exhausted; the answer may not be minimal"
        );
    }
    if report.cheapest.is_none() {
        tracing::warn!("No spell sequence beats the boss");
    }

    for line in output::wizard_lines(&report, cli.show_path) {
        println!("{}", line);
    }

    Ok(())
}
