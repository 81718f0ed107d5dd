//! Order Export CLI
//!
//! Exports Cardmarket order rows to Moxfield/Deckbox CSV or clipboard text,
//! analyses Moxfield import errors, and resolves set names for curation.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use mtg_common::SetMappingTable;
use order_export::csv_export::{deckbox_filename, moxfield_filename, order_id_from_title};
use order_export::error_analyzer::{create_corrected_csv, suggest_corrections};
use order_export::sinks::{copy_to_clipboard, download_csv, DirectoryDownload, WriterClipboard};
use order_export::{
    clipboard_text, generate_csv, generate_deckbox_csv, EdgeCaseTable, ExportSession, RecordKind,
    RowFeed, SetCodeResolver, UnknownSetTracker,
};
use std::path::{Path, PathBuf};

/// Cardmarket order export and Moxfield import repair
#[derive(Parser, Debug)]
#[command(name = "order_export")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Set mapping CSV to use instead of the bundled table
    #[arg(long, global = true)]
    mappings: Option<PathBuf>,

    /// Extra edge case mappings (name,code CSV) applied over the defaults
    #[arg(long, global = true)]
    edge_cases: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export order rows (JSON arrays of row attributes) to a file or clipboard
    Export {
        /// Row files, processed in order as successive batches
        #[arg(required = true)]
        rows: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Moxfield)]
        format: Format,

        /// Order page title, used to name the file (e.g. "Order #1234567")
        #[arg(long, default_value = "")]
        title: String,

        /// Directory for the CSV file (default: the download directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Cross-reference Moxfield's error text with the CSV that was imported
    Analyze {
        /// Text file with Moxfield's error messages
        #[arg(long)]
        errors: PathBuf,

        /// The CSV file that was imported
        #[arg(long)]
        csv: PathBuf,

        /// Directory for the error and corrected CSV files
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Resolve set names and report the ones that need a mapping
    Resolve {
        /// Cardmarket expansion names
        #[arg(required = true)]
        names: Vec<String>,

        /// Session-only override, NAME=CODE (repeatable)
        #[arg(long = "edge-case", value_parser = parse_edge_case)]
        edge_case: Vec<(String, String)>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Moxfield,
    Deckbox,
    Text,
}

fn parse_edge_case(s: &str) -> Result<(String, String), String> {
    match s.rsplit_once('=') {
        Some((name, code)) if !name.is_empty() && !code.trim().is_empty() => {
            Ok((name.to_string(), code.trim().to_string()))
        }
        _ => Err(format!("expected NAME=CODE, got \"{s}\"")),
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=order_export=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let resolver = build_resolver(&cli)?;

    match cli.command {
        Command::Export {
            rows,
            format,
            title,
            out_dir,
        } => export(resolver, &rows, format, &title, out_dir),
        Command::Analyze {
            errors,
            csv,
            out_dir,
        } => analyze(&errors, &csv, out_dir),
        Command::Resolve { names, edge_case } => {
            resolve(resolver, &names, edge_case);
            Ok(())
        }
    }
}

fn build_resolver(cli: &Cli) -> anyhow::Result<SetCodeResolver> {
    let mappings = match &cli.mappings {
        Some(path) => SetMappingTable::load(path)
            .with_context(|| format!("loading set mappings from {}", path.display()))?,
        None => SetMappingTable::bundled()?,
    };
    let edge_cases = match &cli.edge_cases {
        Some(path) => EdgeCaseTable::with_file(path)
            .with_context(|| format!("loading edge cases from {}", path.display()))?,
        None => EdgeCaseTable::defaults(),
    };

    log::debug!(
        "Using {} set mappings and {} edge cases",
        mappings.len(),
        edge_cases.len()
    );
    Ok(SetCodeResolver::new(mappings, edge_cases))
}

fn export(
    resolver: SetCodeResolver,
    row_files: &[PathBuf],
    format: Format,
    title: &str,
    out_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let kind = match format {
        Format::Deckbox => RecordKind::Deckbox,
        Format::Moxfield | Format::Text => RecordKind::Moxfield,
    };
    let mut session = ExportSession::with_kind(resolver, kind);
    {
        let mut feed = RowFeed::new();
        feed.subscribe(|batch| {
            session.ingest(batch);
        });
        for path in row_files {
            let rows = order_export::io::read_rows(path)
                .with_context(|| format!("reading rows from {}", path.display()))?;
            feed.publish(&rows);
        }
    }

    if session.skipped() > 0 {
        log::warn!("{} rows were skipped", session.skipped());
    }
    if session.is_empty() {
        bail!("No articles found to export");
    }

    let order_id = order_id_from_title(title);
    let mut target = DirectoryDownload::new(out_dir.unwrap_or_else(DirectoryDownload::default_dir));

    match format {
        Format::Moxfield => {
            let content = generate_csv(session.records())?;
            let filename = moxfield_filename(&order_id);
            download_csv(&mut target, &filename, &content);
            log::info!(
                "Exported {} articles to Moxfield CSV: {}",
                session.records().len(),
                filename
            );
        }
        Format::Deckbox => {
            let content = generate_deckbox_csv(session.deckbox_records())?;
            download_csv(&mut target, &deckbox_filename(&order_id), &content);
        }
        Format::Text => {
            let mut clipboard = WriterClipboard::new(std::io::stdout());
            copy_to_clipboard(&mut clipboard, &clipboard_text(session.records()));
        }
    }

    if !session.tracker().is_empty() {
        eprintln!("{}", session.tracker().report());
    }
    Ok(())
}

fn analyze(errors_path: &Path, csv_path: &Path, out_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let error_text = order_export::io::read_text(errors_path)
        .with_context(|| format!("reading {}", errors_path.display()))?;
    let csv_content = order_export::io::read_text(csv_path)
        .with_context(|| format!("reading {}", csv_path.display()))?;

    let result = order_export::analyze(&error_text, &csv_content);
    println!("{}", result.summary);

    if result.errors.is_empty() {
        log::info!("No matching error rows found");
        return Ok(());
    }

    let corrections = suggest_corrections(&result.errors);
    if corrections.is_empty() {
        println!("No known corrections for these editions.");
    } else {
        println!("Suggested corrections:");
        for (wrong, fix) in &corrections {
            println!("  {wrong} -> {fix}");
        }
    }

    let stem = csv_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "moxfield".to_string());
    let mut target = DirectoryDownload::new(out_dir.unwrap_or_else(DirectoryDownload::default_dir));
    download_csv(&mut target, &format!("{stem} - errors"), &result.error_csv());
    download_csv(
        &mut target,
        &format!("{stem} - corrected"),
        &create_corrected_csv(&result, &corrections),
    );
    Ok(())
}

fn resolve(mut resolver: SetCodeResolver, names: &[String], edge_cases: Vec<(String, String)>) {
    for (name, code) in &edge_cases {
        resolver.edge_cases_mut().add(name, code);
    }

    let mut tracker = UnknownSetTracker::new();
    for name in names {
        let resolution = resolver.resolve_detailed(name, &mut tracker);
        println!("{name}\t{}\t{:?}", resolution.code, resolution.kind);
    }

    if !tracker.is_empty() {
        println!();
        println!("{}", tracker.report());
    }
}
