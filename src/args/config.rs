use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::controller::awards::{AwardNomination, SINGLE_AWARD_MAX_NOMINEES};
use crate::controller::wager::WagerConfig;
use crate::error::CoreError;
use crate::model::{
    CourseDatabase, EventContext, PlayerId, Roster, ScoreInput, ScoreLedger, select_course,
};

pub const LONGEST_DRIVE: &str = "longest drive";
pub const NEAREST_PIN: &str = "nearest pin";
pub const NEAREST_PIN_N: &str = "nearest pin (N)";

/// Event setup file.
///
/// ```toml
/// course = "Sunrise"
/// front_area = "East"
/// back_area = "West"
/// date = "2026-10-18"
///
/// [scores]
/// Alice = "454344354445344435"
/// Bob = [5, 5, 4, 4, 5, 4, 4, 5, 4, 5, 4, 5, 4, 4, 5, 4, 4, 5]
///
/// [[wagers]]
/// format = "field_match_play"
/// bet_unit = 50
///
/// [awards]
/// longest_drive = ["Alice"]
/// nearest_pin_n = ["Bob", "Bob"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct EventFile {
    pub course: String,
    pub front_area: String,
    pub back_area: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub scores: BTreeMap<String, ScoreInput>,
    #[serde(default)]
    pub wagers: Vec<WagerConfig>,
    #[serde(default)]
    pub awards: AwardsFile,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwardsFile {
    #[serde(default)]
    pub longest_drive: Vec<String>,
    #[serde(default)]
    pub nearest_pin: Vec<String>,
    #[serde(default)]
    pub nearest_pin_n: Vec<String>,
}

impl EventFile {
    /// # Errors
    ///
    /// Returns `CoreError::Parse` if the text is not a valid event file.
    pub fn parse(contents: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str::<Self>(contents)?)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Io` if the file cannot be read, otherwise as
    /// [`EventFile::parse`].
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Single-style awards take at most two nominees.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Parse` naming the award that has too many.
    pub fn check_award_limits(&self) -> Result<(), CoreError> {
        for (name, nominees) in [
            (LONGEST_DRIVE, &self.awards.longest_drive),
            (NEAREST_PIN, &self.awards.nearest_pin),
        ] {
            if nominees.len() > SINGLE_AWARD_MAX_NOMINEES {
                return Err(CoreError::Parse(format!(
                    "{name} has {} nominees, at most {SINGLE_AWARD_MAX_NOMINEES} allowed",
                    nominees.len()
                )));
            }
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::UnknownPlayer` for a nominee missing from the
    /// roster.
    pub fn nominations(&self, roster: &Roster) -> Result<Vec<AwardNomination>, CoreError> {
        let ids = |names: &[String]| -> Result<Vec<PlayerId>, CoreError> {
            names
                .iter()
                .map(|n| roster.require(&PlayerId::new(n.as_str())).map(|p| p.id.clone()))
                .collect()
        };
        Ok(vec![
            AwardNomination::single(LONGEST_DRIVE, ids(&self.awards.longest_drive)?),
            AwardNomination::single(NEAREST_PIN, ids(&self.awards.nearest_pin)?),
            AwardNomination::count_based(NEAREST_PIN_N, ids(&self.awards.nearest_pin_n)?),
        ])
    }

    pub fn score_ledger(&self) -> ScoreLedger {
        self.scores
            .iter()
            .fold(ScoreLedger::new(), |ledger, (name, input)| {
                ledger.with_input(&PlayerId::new(name.as_str()), input)
            })
    }

    /// Select the course and bind roster and cards into one context.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSelection` for a bad area choice and
    /// `CoreError::UnknownPlayer` for a card without a roster entry.
    pub fn build_context(
        &self,
        db: &CourseDatabase,
        roster: Roster,
    ) -> Result<EventContext, CoreError> {
        let course = select_course(db, &self.course, &self.front_area, &self.back_area)?;
        let ctx = EventContext::new(course, roster, self.score_ledger())?;
        Ok(match self.date {
            Some(date) => ctx.with_date(date),
            None => ctx,
        })
    }
}
