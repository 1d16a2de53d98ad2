use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::CoreError;

/// Players are keyed by their roster name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub handicap: i32,
    pub champion_ineligible: bool,
    pub runnerup_ineligible: bool,
}

impl Player {
    pub fn new(name: &str, handicap: i32) -> Self {
        Self {
            id: PlayerId::new(name),
            handicap,
            champion_ineligible: false,
            runnerup_ineligible: false,
        }
    }

    #[must_use]
    pub fn with_eligibility(mut self, champion_ineligible: bool, runnerup_ineligible: bool) -> Self {
        self.champion_ineligible = champion_ineligible;
        self.runnerup_ineligible = runnerup_ineligible;
        self
    }

    /// Next-event record; the current record is left untouched.
    #[must_use]
    pub fn with_handicap_delta(&self, delta: i32) -> Self {
        Self {
            handicap: self.handicap + delta,
            ..self.clone()
        }
    }
}

/// Read-only player list for one event, in roster order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    index: HashMap<PlayerId, usize, RandomState>,
}

impl Roster {
    /// # Errors
    ///
    /// Returns `CoreError::Parse` when two roster rows share a name.
    pub fn new(players: Vec<Player>) -> Result<Self, CoreError> {
        let mut index = HashMap::with_hasher(RandomState::new());
        for (i, player) in players.iter().enumerate() {
            if index.insert(player.id.clone(), i).is_some() {
                return Err(CoreError::Parse(format!(
                    "duplicate roster name '{}'",
                    player.id
                )));
            }
        }
        Ok(Self { players, index })
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.index.get(id).map(|&i| &self.players[i])
    }

    /// # Errors
    ///
    /// Returns `CoreError::UnknownPlayer` if the name is not on the roster.
    pub fn require(&self, id: &PlayerId) -> Result<&Player, CoreError> {
        self.get(id)
            .ok_or_else(|| CoreError::UnknownPlayer(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
