//! SpriteGrid CLI - assemble sprite sheets from the command line.

mod error;
mod progress;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::info;

use crate::error::CliError;
use crate::progress::ConsoleProgress;
use spritegrid::sheet::{self, SheetConfig};

/// Assemble individual sprite images into a uniform grid sprite sheet.
///
/// Every image gets one fixed-size cell; the cell size is the per-axis
/// maximum over all inputs, and each image is centered within its cell.
#[derive(Debug, Parser)]
#[command(name = "spritegrid", version = spritegrid::VERSION)]
struct Cli {
    /// Source image files, placed left-to-right, top-to-bottom.
    sources: Vec<PathBuf>,

    /// Number of grid columns.
    #[arg(short, long, default_value_t = 3)]
    columns: u32,

    /// Output filename.
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,
}

fn main() -> ExitCode {
    spritegrid::telemetry::init_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Reject bad column counts before any file is touched.
    if cli.columns < 1 {
        return Err(CliError::Config(format!(
            "column count must be at least 1 (got {})",
            cli.columns
        )));
    }

    let config = SheetConfig::new(cli.sources)
        .with_columns(cli.columns)
        .with_output(cli.output);

    info!(
        version = spritegrid::VERSION,
        sources = config.sources.len(),
        columns = config.columns,
        "starting sheet assembly"
    );

    println!("SpriteGrid v{}", spritegrid::VERSION);
    println!();
    println!("Sources: {}", config.sources.len());
    println!("Columns: {}", config.columns);
    println!("Output:  {}", config.output.display());
    println!();

    let progress = ConsoleProgress::new(config.sources.len() as u64);
    let summary = sheet::run(&config, &progress)?;
    progress.finish();

    println!("Cell size:  {}", summary.cell);
    println!(
        "Grid:       {} columns × {} rows",
        summary.grid.columns, summary.grid.rows
    );
    println!("Sheet size: {}", summary.canvas);
    println!();
    println!(
        "Wrote {} image(s) to {}",
        summary.image_count,
        summary.output.display()
    );

    Ok(())
}
