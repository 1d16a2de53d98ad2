use clap::Parser;

pub mod config;
pub mod types;
pub mod validation;

pub use config::{AwardsFile, EventFile};
pub use types::{Args, CleanArgs, OutputFormat};

pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    pub fn new(args: Args) -> Self {
        let log_level = if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        CleanArgs {
            course_csv: args.course_csv,
            roster_csv: args.roster_csv,
            event: args.event,
            output_dir: args.output_dir,
            format: args.format,
            log_level,
        }
    }
}
