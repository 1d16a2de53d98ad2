use anyhow::{Context, Result};
use golf_stakes::args::{self, OutputFormat};
use golf_stakes::controller::{build_event_report, load_course_database, load_roster};
use golf_stakes::view::{leaderboard_rows, render_event_report, write_csv, write_csv_bundle};
use std::fs;
use std::io;

fn main() -> Result<()> {
    let args = args::args_checks();
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    let db = load_course_database(&args.course_csv)
        .with_context(|| format!("load course csv {}", args.course_csv.display()))?;
    let roster = load_roster(&args.roster_csv)
        .with_context(|| format!("load roster csv {}", args.roster_csv.display()))?;

    let event = &args.event;
    let nominations = event.nominations(&roster)?;
    let ctx = event
        .build_context(&db, roster)
        .with_context(|| format!("set up {} {}/{}", event.course, event.front_area, event.back_area))?;
    let report = build_event_report(&ctx, &event.wagers, &nominations)?;
    log::info!(
        "{} players ranked, {} wagers settled",
        report.leaderboard.entries.len(),
        report.settlements.len()
    );

    match (&args.output_dir, args.format) {
        (Some(dir), OutputFormat::Csv) => {
            let written = write_csv_bundle(dir, &report)?;
            println!("{} files written to {}", written.len(), dir.display());
        }
        (Some(dir), OutputFormat::Json) => {
            fs::create_dir_all(dir)?;
            let path = dir.join("event.json");
            fs::write(&path, serde_json::to_string_pretty(&report)?)
                .with_context(|| format!("write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        (Some(dir), OutputFormat::Html) => {
            fs::create_dir_all(dir)?;
            let path = dir.join("event.html");
            fs::write(&path, render_event_report(&report).into_string())
                .with_context(|| format!("write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        (None, OutputFormat::Csv) => {
            write_csv(io::stdout().lock(), &leaderboard_rows(&report.leaderboard))?;
        }
        (None, OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        (None, OutputFormat::Html) => {
            println!("{}", render_event_report(&report).into_string());
        }
    }

    Ok(())
}
