use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::model::course::CourseSelection;
use crate::model::player::{Player, PlayerId, Roster};
use crate::model::score::{ScoreEntry, ScoreInput, ScoreLine, record_score};

/// Score entries for one event, keyed by player. Re-entering a player's
/// card produces a new ledger.
#[derive(Clone, Debug, Default)]
pub struct ScoreLedger {
    entries: BTreeMap<PlayerId, ScoreEntry>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(&self, entry: ScoreEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(entry.player().clone(), entry);
        Self { entries }
    }

    #[must_use]
    pub fn with_input(&self, player: &PlayerId, input: &ScoreInput) -> Self {
        self.with_entry(record_score(player, input))
    }

    pub fn entry(&self, player: &PlayerId) -> Option<&ScoreEntry> {
        self.entries.get(player)
    }

    pub fn line(&self, player: &PlayerId) -> Option<&ScoreLine> {
        self.entry(player).and_then(ScoreEntry::line)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.values()
    }

    pub fn complete_lines(&self) -> impl Iterator<Item = &ScoreLine> {
        self.entries.values().filter_map(ScoreEntry::line)
    }

    pub fn incomplete_players(&self) -> impl Iterator<Item = &PlayerId> {
        self.entries
            .values()
            .filter(|e| e.line().is_none())
            .map(ScoreEntry::player)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything one computation stage needs, passed by reference. Stages
/// return new values instead of mutating this.
#[derive(Clone, Debug)]
pub struct EventContext {
    pub course: CourseSelection,
    pub roster: Roster,
    pub scores: ScoreLedger,
    pub date: Option<NaiveDate>,
}

impl EventContext {
    /// # Errors
    ///
    /// Returns `CoreError::UnknownPlayer` if the ledger holds a card for a
    /// name missing from the roster.
    pub fn new(
        course: CourseSelection,
        roster: Roster,
        scores: ScoreLedger,
    ) -> Result<Self, CoreError> {
        for entry in scores.entries() {
            roster.require(entry.player())?;
        }
        Ok(Self {
            course,
            roster,
            scores,
            date: None,
        })
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Roster players that have a complete card, in roster order.
    pub fn scored_players(&self) -> impl Iterator<Item = (&Player, &ScoreLine)> {
        self.roster
            .iter()
            .filter_map(|p| self.scores.line(&p.id).map(|line| (p, line)))
    }
}
