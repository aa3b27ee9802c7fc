// notecleaner: turn note editor HTML exports into semantic HTML.
//
// Reads a file (or stdin), writes the cleaned fragment to a file (or stdout).
// Logs go to stderr so they never mix with the output.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use notecleaner::{CleanConfig, NoteCleaner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "notecleaner")]
#[command(version, about = "Clean note editor HTML exports into semantic HTML")]
struct Args {
    /// Input HTML file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Write the cleaned HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file overriding the default style tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print per-pass change counts to stderr
    #[arg(long)]
    report: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the default configuration as JSON and exit
    #[arg(long)]
    print_default_config: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}

fn write_output(path: Option<&PathBuf>, html: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.print_default_config {
        println!("{}", CleanConfig::default().to_json_pretty()?);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => CleanConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => CleanConfig::default(),
    };

    let html = read_input(args.input.as_ref())?;
    let cleaner = NoteCleaner::new(config);
    let (cleaned, report) = cleaner
        .clean_with_report(&html)
        .context("Failed to clean note HTML")?;

    write_output(args.output.as_ref(), &cleaned)?;

    if args.report {
        for (pass, changes) in &report.passes {
            eprintln!("{pass:<28} {changes}");
        }
        eprintln!("{:<28} {}", "total", report.total_changes());
    }
    tracing::info!(
        input_bytes = html.len(),
        output_bytes = cleaned.len(),
        "Conversion complete"
    );

    Ok(())
}
