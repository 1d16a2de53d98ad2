use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::error::CoreError;
use crate::model::{CourseDatabase, CourseRecord, Player, Roster};

#[derive(Deserialize)]
struct RosterRecord {
    name: String,
    handicap: i32,
    #[serde(default)]
    champion: Option<String>,
    #[serde(default)]
    runnerup: Option<String>,
}

/// Roster columns hold eligibility: `no` marks the player ineligible.
fn ineligible(flag: Option<&str>) -> Result<bool, CoreError> {
    match flag.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "yes" | "y" | "true" | "1") => Ok(false),
        Some("no" | "n" | "false" | "0") => Ok(true),
        Some(other) => Err(CoreError::Parse(format!(
            "eligibility flag '{other}' is not yes/no"
        ))),
    }
}

/// # Errors
///
/// Returns `CoreError::Parse` when a row does not match
/// `course_name,area,hole,par,hcp`.
pub fn read_course_database<R: Read>(reader: R) -> Result<CourseDatabase, CoreError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let records = rdr
        .deserialize::<CourseRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("loaded {} course rows", records.len());
    Ok(CourseDatabase::new(records))
}

/// # Errors
///
/// Returns `CoreError::Parse` for malformed rows, bad eligibility flags or
/// duplicate names.
pub fn read_roster<R: Read>(reader: R) -> Result<Roster, CoreError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut players = Vec::new();
    for row in rdr.deserialize::<RosterRecord>() {
        let row = row?;
        if row.name.is_empty() {
            continue;
        }
        players.push(Player::new(&row.name, row.handicap).with_eligibility(
            ineligible(row.champion.as_deref())?,
            ineligible(row.runnerup.as_deref())?,
        ));
    }
    log::debug!("loaded {} roster players", players.len());
    Roster::new(players)
}

/// # Errors
///
/// Returns `CoreError::Io` if the file cannot be opened, otherwise as
/// [`read_course_database`].
pub fn load_course_database(path: &Path) -> Result<CourseDatabase, CoreError> {
    read_course_database(std::fs::File::open(path)?)
}

/// # Errors
///
/// Returns `CoreError::Io` if the file cannot be opened, otherwise as
/// [`read_roster`].
pub fn load_roster(path: &Path) -> Result<Roster, CoreError> {
    read_roster(std::fs::File::open(path)?)
}
