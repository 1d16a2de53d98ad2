use std::{fs, path::PathBuf};

use crate::args::config::EventFile;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a valid event
/// file
pub fn check_readable_file_and_toml(file: &str) -> Result<EventFile, String> {
    let path = check_readable_file(file)?;
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The event file '{file}': {e}"))?;
    let event = EventFile::parse(&contents).map_err(|e| format!("The event file '{file}': {e}"))?;
    event
        .check_award_limits()
        .map_err(|e| format!("The event file '{file}': {e}"))?;
    Ok(event)
}
