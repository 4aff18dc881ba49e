use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use opening_hours::{config::AppConfig, schedule::WeeklySchedule};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const VERBOSE_DIRECTIVE: &str = "opening_hours=debug";

#[derive(Parser, Debug)]
#[command(name = "opening-hours")]
#[command(about = "Print a weekly opening-hours JSON document as human-readable text")]
struct Args {
    /// Opening-hours JSON file (reads stdin when omitted and no input.path is configured)
    file: Option<PathBuf>,

    /// Enable debug logging for this crate (applied on top of RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
            .parse_lossy(&config.logging.level)
    });
    let filter = with_verbose(filter, args.verbose);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let input = read_input(args.file.or(config.input.path.clone()))?;
    let schedule = WeeklySchedule::from_json(&input).context("Failed to read opening hours")?;

    let report = schedule
        .render()
        .inspect_err(|e| tracing::error!("Invalid opening hours: {}", e))?;
    tracing::info!("Rendered {} day line(s)", report.lines().count());

    if config.output.skip_trailing_newline {
        print!("{}", report.trim_end_matches('\n'));
    } else {
        print!("{}", report);
    }

    Ok(())
}

/// Add debug logging for this crate on top of `RUST_LOG` or `logging.level`.
fn with_verbose(filter: EnvFilter, verbose: bool) -> EnvFilter {
    if !verbose {
        return filter;
    }
    match VERBOSE_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Read the JSON document from `path`, or from stdin when there is none.
fn read_input(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::info!("Reading opening hours from {}", path.display());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            tracing::info!("Reading opening hours from stdin");
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
