use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::controller::{AwardSummary, EventReport, Leaderboard, SettlementResult};
use crate::error::CoreError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub player: String,
    pub handicap: i32,
    pub gross: u32,
    pub net: i32,
    pub gross_rank: u32,
    pub net_rank: u32,
    pub birdies: String,
    pub handicap_delta: i32,
    pub new_handicap: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlacementRow {
    pub title: String,
    pub player: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AwardRow {
    pub award: String,
    pub result: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleWagerRow {
    pub hole: u8,
    pub matchup: String,
    pub winner: String,
    pub multiplier: u8,
    pub deltas: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SettlementRow {
    pub player: String,
    pub earnings: i64,
    pub win: u32,
    pub lose: u32,
    pub tie: u32,
}

pub fn join_holes(holes: &[u8]) -> String {
    holes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

/// Rows in leaderboard order (net rank first).
pub fn leaderboard_rows(leaderboard: &Leaderboard) -> Vec<LeaderboardRow> {
    leaderboard
        .entries
        .iter()
        .map(|e| LeaderboardRow {
            player: e.player.to_string(),
            handicap: e.handicap,
            gross: e.gross_total,
            net: e.net_total,
            gross_rank: e.gross_rank,
            net_rank: e.net_rank,
            birdies: join_holes(&e.birdie_holes),
            handicap_delta: e.handicap_delta,
            new_handicap: e.new_handicap,
        })
        .collect()
}

pub fn placement_rows(leaderboard: &Leaderboard) -> Vec<PlacementRow> {
    leaderboard
        .placement
        .titles()
        .into_iter()
        .map(|(title, player)| PlacementRow {
            title: title.to_string(),
            player: player.map_or_else(|| "none".to_string(), ToString::to_string),
        })
        .collect()
}

pub fn award_rows(awards: &[AwardSummary]) -> Vec<AwardRow> {
    awards
        .iter()
        .map(|a| AwardRow {
            award: a.category.clone(),
            result: a.display.clone(),
        })
        .collect()
}

/// One row per hole (and pairing), ordered by hole number.
pub fn hole_wager_rows(result: &SettlementResult) -> Vec<HoleWagerRow> {
    result
        .holes
        .iter()
        .map(|h| HoleWagerRow {
            hole: h.hole,
            matchup: h
                .matchup
                .as_ref()
                .map_or_else(|| "field".to_string(), ToString::to_string),
            winner: h.outcome.to_string(),
            multiplier: h.multiplier,
            deltas: if h.stake_deltas.is_empty() {
                "0".to_string()
            } else {
                h.stake_deltas
                    .iter()
                    .map(|(p, d)| format!("{d:+} {p}"))
                    .collect::<Vec<_>>()
                    .join("; ")
            },
        })
        .collect()
}

pub fn settlement_rows(result: &SettlementResult) -> Vec<SettlementRow> {
    result
        .total_earnings
        .iter()
        .map(|(player, &earnings)| {
            let record = result.record(player).unwrap_or_default();
            SettlementRow {
                player: player.to_string(),
                earnings,
                win: record.win,
                lose: record.lose,
                tie: record.tie,
            }
        })
        .collect()
}

/// # Errors
///
/// Returns `CoreError::Parse` or `CoreError::Io` if a row cannot be written.
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), CoreError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parse a leaderboard export back into rows.
///
/// # Errors
///
/// Returns `CoreError::Parse` if the CSV does not have the leaderboard
/// columns.
pub fn read_leaderboard_csv<R: Read>(reader: R) -> Result<Vec<LeaderboardRow>, CoreError> {
    let mut rdr = csv::Reader::from_reader(reader);
    Ok(rdr
        .deserialize::<LeaderboardRow>()
        .collect::<Result<Vec<_>, _>>()?)
}

fn write_csv_file<T: Serialize>(path: PathBuf, rows: &[T]) -> Result<PathBuf, CoreError> {
    write_csv(File::create(&path)?, rows)?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// Write every result table of `report` as CSV files under `dir`, returning
/// the paths written in order.
///
/// # Errors
///
/// Returns `CoreError::Io` if a file cannot be created.
pub fn write_csv_bundle(dir: &Path, report: &EventReport) -> Result<Vec<PathBuf>, CoreError> {
    fs::create_dir_all(dir)?;
    let mut written = vec![
        write_csv_file(
            dir.join("leaderboard.csv"),
            &leaderboard_rows(&report.leaderboard),
        )?,
        write_csv_file(
            dir.join("placements.csv"),
            &placement_rows(&report.leaderboard),
        )?,
        write_csv_file(dir.join("awards.csv"), &award_rows(&report.awards))?,
    ];
    for (i, settlement) in report.settlements.iter().enumerate() {
        let n = i + 1;
        written.push(write_csv_file(
            dir.join(format!("wager{n}_holes.csv")),
            &hole_wager_rows(settlement),
        )?);
        written.push(write_csv_file(
            dir.join(format!("wager{n}_summary.csv")),
            &settlement_rows(settlement),
        )?);
    }
    Ok(written)
}
