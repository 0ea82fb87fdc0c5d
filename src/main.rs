use clap::{ArgAction, ArgGroup, Parser};
use color_eyre::Result;
use std::io::Write;
use std::path::PathBuf;

use off_estimator::config::{self, ConfigResult, LogLevel};
use off_estimator::error::EstimatorError;
use off_estimator::input::{InputSource, open_lines};
use off_estimator::output::write_report;
use off_estimator::projection::Projector;
use off_estimator::stats::Aggregator;

/// Stream OFF JSONL.gz and estimate projected payload sizes
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Stream OFF JSONL.gz and estimate projected payload sizes"
)]
#[command(group(ArgGroup::new("source").required(true).args(["stdin", "input"])))]
struct Args {
    /// Read gzipped JSONL from stdin
    #[arg(long)]
    stdin: bool,

    /// Path to gzipped JSONL file
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Number of records to process for sampling (0 = full stream)
    #[arg(long, value_name = "N")]
    sample: Option<u64>,

    /// Optional path to write JSON report (defaults to stdout)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/off-estimator/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    init_logging(config.log.level.raised(args.verbose));
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }

    let source = match args.input {
        Some(path) => InputSource::File(path),
        None => InputSource::Stdin,
    };
    let sample = args.sample.unwrap_or(config.estimate.sample);

    let lines = open_lines(&source)?;
    let aggregator = Aggregator::new(Projector::new(config.estimate.image_language), sample)
        .with_progress_interval(config.estimate.progress_interval);
    let stats = aggregator.try_run(lines.map(|line| line.map_err(EstimatorError::Read)))?;

    write_report(&stats, args.output.as_deref())?;

    Ok(())
}

/// Log to stderr so stdout carries only the report. `RUST_LOG` overrides
/// the configured level.
fn init_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
