//! Equipment optimizer.
//!
//! Fights the boss once with every legal loadout and prints, one per line:
//! the number of winning loadouts, the least gold that wins and the most
//! gold that loses.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p arena-client --bin shop
//! cargo run -p arena-client --bin shop -- --catalog my_shop.ron
//! ```

use std::path::PathBuf;

use anyhow::Result;
use arena_client::{ClientConfig, logging, output};
use clap::Parser;

/// Find the cheapest winning and priciest losing equipment loadouts
#[derive(Parser, Debug)]
#[command(name = "shop")]
#[command(version, about, long_about = None)]
struct Cli {
    /// RON shop catalog (defaults to the built-in shop, or ARENA_CATALOG)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// TOML scenario (defaults to the built-in boss, or ARENA_SCENARIO)
    #[arg(long)]
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()
        .with_catalog_path(cli.catalog)
        .with_scenario_path(cli.scenario);

    logging::setup_logging(&config.log_filter)?;

    let catalog = config.load_catalog()?;
    let scenario = config.load_scenario()?;
    tracing::info!(
        loadouts = catalog.loadout_count(),
        boss = ?scenario.shop.boss,
        "Simulating shop loadouts"
    );

    let report = game_core::optimize(&catalog, &scenario.shop);
    if report.cheapest_win.is_none() {
        tracing::warn!("No loadout beats the boss");
    }
    if report.priciest_loss.is_none() {
        tracing::warn!("Every loadout beats the boss");
    }

    for line in output::shop_lines(&report) {
        println!("{}", line);
    }

    Ok(())
}
