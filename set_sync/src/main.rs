//! Set Sync - refresh the set mapping file from Scryfall
//!
//! Run after new releases; rebuild order_export afterwards to pick up the
//! bundled table.

use anyhow::Context;
use clap::Parser;
use mtg_common::SetMappingTable;
use set_sync::{fetch_sets_from, merge_sets, read_sets, SCRYFALL_API};
use std::path::PathBuf;

/// Sync the set mapping table with the Scryfall set catalog
#[derive(Parser, Debug)]
#[command(name = "set_sync")]
#[command(version, about, long_about = None)]
struct Args {
    /// Set mapping CSV to update
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/../mtg_common/data/set_mappings.csv"))]
    mappings: PathBuf,

    /// Use a saved `/sets` response instead of downloading
    #[arg(long)]
    input: Option<PathBuf>,

    /// Report new mappings without writing the file
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Scryfall API base URL
    #[arg(long, default_value = SCRYFALL_API)]
    base_url: String,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        log::error!("Error during sync: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let sets = match &args.input {
        Some(path) => read_sets(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            log::info!("Fetching latest sets from {}", args.base_url);
            fetch_sets_from(&args.base_url).await?
        }
    };
    log::info!("Found {} sets", sets.len());

    let current = SetMappingTable::load(&args.mappings)
        .with_context(|| format!("Failed to load {}", args.mappings.display()))?;
    log::info!("Found {} existing mappings", current.len());

    let outcome = merge_sets(&current, &sets);

    if args.dry_run {
        for (name, code) in &outcome.added {
            println!("{},{}", name, code);
        }
        log::info!("Dry run: {} new mappings not written", outcome.added.len());
        return Ok(());
    }

    outcome.table.save(&args.mappings)?;
    log::info!(
        "Sync complete! Total mappings: {} ({} added), written to {}",
        outcome.table.len(),
        outcome.added.len(),
        args.mappings.display()
    );
    Ok(())
}
