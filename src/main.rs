use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use geofeat::table::{write_rows, BatchReport, OutputFormat};
use geofeat::{Config, ParcelFeatureExtractor, TrajectoryFeatureExtractor};

#[derive(Parser)]
#[command(name = "geofeat")]
#[command(about = "Per-file features for GPS trajectories and land parcels")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Duration, distance, speed and acceleration per trajectory file
    Trajectories(RunArgs),
    /// Area, perimeter and vertex count per parcel file
    Parcels(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Directory holding the input CSV files
    dir: PathBuf,
    /// Sort rows by identifier
    #[arg(long)]
    sort: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Write the table here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match cli.command {
        Commands::Trajectories(args) => {
            let extractor = TrajectoryFeatureExtractor::from_config(&config)
                .sorted(config.sort_by_id || args.sort);
            match extractor.extract_dir(&args.dir) {
                Ok(report) => finish(&report, &args),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Parcels(args) => {
            let extractor =
                ParcelFeatureExtractor::from_config(&config).sorted(config.sort_by_id || args.sort);
            match extractor.extract_dir(&args.dir) {
                Ok(report) => finish(&report, &args),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn finish<R: Serialize, E: Display>(report: &BatchReport<R, E>, args: &RunArgs) -> ExitCode {
    if let Err(e) = write_table(&report.rows, args.format, args.output.as_deref()) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    for failure in &report.failures {
        eprintln!("  {}: {}", failure.path.display(), failure.error);
    }
    eprintln!(
        "{} rows written, {} files failed",
        report.rows.len(),
        report.failures.len()
    );

    if report.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_table<R: Serialize>(
    rows: &[R],
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), geofeat::TableError> {
    match output {
        Some(path) => write_rows(rows, format, File::create(path)?),
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_rows(rows, format, &mut lock)?;
            lock.flush()?;
            Ok(())
        }
    }
}
