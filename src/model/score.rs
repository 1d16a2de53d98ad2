use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::model::course::{HOLES_PER_ROUND, Hole};
use crate::model::player::PlayerId;

/// Raw score entry as handed over by the input collaborator.
///
/// Text is either the quick-entry digit string (`"454344354445344435"`, one
/// stroke per character, 1-9 only) or a delimited list
/// (`"4,5,4,3,10,..."`) which can carry double-digit holes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScoreInput {
    Text(String),
    Strokes(Vec<u32>),
}

impl From<&str> for ScoreInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<u32>> for ScoreInput {
    fn from(value: Vec<u32>) -> Self {
        Self::Strokes(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncompleteReason {
    #[error("no score entered")]
    Empty,
    #[error("expected {HOLES_PER_ROUND} holes, found {found}")]
    WrongLength { found: usize },
    #[error("'{token}' is not a stroke count")]
    NotNumeric { token: String },
    #[error("hole {hole} has no strokes")]
    ZeroStroke { hole: usize },
    #[error("hole {hole} has {strokes} strokes, at most {MAX_STROKES_PER_HOLE} allowed")]
    TooManyStrokes { hole: usize, strokes: u32 },
}

/// A complete 18-hole card. Can only be built through `record_score`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub player: PlayerId,
    strokes: Vec<u32>,
}

impl ScoreLine {
    pub fn strokes(&self) -> &[u32] {
        &self.strokes
    }

    /// Strokes on hole `number` (1-based).
    pub fn on_hole(&self, number: u8) -> Option<u32> {
        self.strokes
            .get(usize::from(number).checked_sub(1)?)
            .copied()
    }

    pub fn gross(&self) -> u32 {
        self.strokes.iter().sum()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ScoreEntry {
    Complete(ScoreLine),
    Incomplete {
        player: PlayerId,
        reason: IncompleteReason,
    },
}

impl ScoreEntry {
    pub fn player(&self) -> &PlayerId {
        match self {
            Self::Complete(line) => &line.player,
            Self::Incomplete { player, .. } => player,
        }
    }

    pub fn line(&self) -> Option<&ScoreLine> {
        match self {
            Self::Complete(line) => Some(line),
            Self::Incomplete { .. } => None,
        }
    }
}

pub const MAX_STROKES_PER_HOLE: u32 = 99;

/// A dash only separates when it sits between two tokens, so `-4` stays one
/// (non-numeric) token.
fn separators() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"[\s,/]+|\b-\b").expect("Invalid regex pattern - this is a programming error")
    })
}

/// Normalise one player's raw entry. Malformed input never fails hard; it
/// comes back as `ScoreEntry::Incomplete` so the rest of the field still
/// gets scored.
#[must_use]
pub fn record_score(player: &PlayerId, input: &ScoreInput) -> ScoreEntry {
    let decoded = match input {
        ScoreInput::Strokes(strokes) => check_strokes(strokes.clone()),
        ScoreInput::Text(text) => decode_text(text.trim()),
    };
    match decoded {
        Ok(strokes) => ScoreEntry::Complete(ScoreLine {
            player: player.clone(),
            strokes,
        }),
        Err(reason) => {
            log::warn!("score for {player} is incomplete: {reason}");
            ScoreEntry::Incomplete {
                player: player.clone(),
                reason,
            }
        }
    }
}

fn decode_text(text: &str) -> Result<Vec<u32>, IncompleteReason> {
    if text.is_empty() {
        return Err(IncompleteReason::Empty);
    }
    if separators().is_match(text) {
        let strokes = separators()
            .split(text)
            .filter(|t| !t.is_empty())
            .map(|t| {
                let not_numeric = || IncompleteReason::NotNumeric {
                    token: t.to_string(),
                };
                if !t.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(not_numeric());
                }
                t.parse::<u32>().map_err(|_| not_numeric())
            })
            .collect::<Result<Vec<_>, _>>()?;
        return check_strokes(strokes);
    }

    // quick-entry path: one digit per hole
    let strokes = text
        .chars()
        .map(|c| {
            c.to_digit(10).ok_or_else(|| IncompleteReason::NotNumeric {
                token: c.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    check_strokes(strokes)
}

fn check_strokes(strokes: Vec<u32>) -> Result<Vec<u32>, IncompleteReason> {
    if strokes.is_empty() {
        return Err(IncompleteReason::Empty);
    }
    if strokes.len() != HOLES_PER_ROUND {
        return Err(IncompleteReason::WrongLength {
            found: strokes.len(),
        });
    }
    if let Some(idx) = strokes.iter().position(|&s| s == 0) {
        return Err(IncompleteReason::ZeroStroke { hole: idx + 1 });
    }
    if let Some(idx) = strokes.iter().position(|&s| s > MAX_STROKES_PER_HOLE) {
        return Err(IncompleteReason::TooManyStrokes {
            hole: idx + 1,
            strokes: strokes[idx],
        });
    }
    Ok(strokes)
}

/// Hole result relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    Worse,
}

impl ScoreDisplay {
    pub fn from_i32(i: i32) -> Self {
        match i {
            i32::MIN..=-4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::Worse,
        }
    }

    pub fn for_hole(strokes: u32, hole: &Hole) -> Self {
        let strokes = i32::try_from(strokes).unwrap_or(i32::MAX);
        Self::from_i32(strokes.saturating_sub(i32::from(hole.par)))
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}
