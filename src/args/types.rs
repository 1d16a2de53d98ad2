use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::args::config::EventFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
    Html,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Course database: course_name,area,hole,par,hcp
    #[arg(
        short = 'c',
        long,
        value_name = "COURSE_CSV",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub course_csv: PathBuf,
    /// Roster: name,handicap,champion,runnerup (yes/no eligibility)
    #[arg(
        short = 'r',
        long,
        value_name = "ROSTER_CSV",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub roster_csv: PathBuf,
    /// Event setup: course areas, scores, wagers and award nominations.
    #[arg(
        short = 'e',
        long,
        value_name = "EVENT_TOML",
        value_parser = crate::args::validation::check_readable_file_and_toml
    )]
    pub event: EventFile,
    /// Write result files here instead of printing to stdout.
    #[arg(short = 'o', long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
    #[arg(short = 'f', long, value_enum, default_value = "csv")]
    pub format: OutputFormat,
    /// Debug logging.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub course_csv: PathBuf,
    pub roster_csv: PathBuf,
    pub event: EventFile,
    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: log::LevelFilter,
}
