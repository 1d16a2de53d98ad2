use serde::{Deserialize, Serialize};

use crate::model::PlayerId;

pub const SINGLE_AWARD_MAX_NOMINEES: usize = 2;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AwardStyle {
    /// Up to two nominees, listed as given.
    Single,
    /// Repeatable nominations, tallied per player.
    CountBased,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AwardNomination {
    pub category: String,
    pub style: AwardStyle,
    pub nominees: Vec<PlayerId>,
}

impl AwardNomination {
    pub fn single(category: &str, nominees: Vec<PlayerId>) -> Self {
        Self {
            category: category.to_string(),
            style: AwardStyle::Single,
            nominees,
        }
    }

    pub fn count_based(category: &str, nominees: Vec<PlayerId>) -> Self {
        Self {
            category: category.to_string(),
            style: AwardStyle::CountBased,
            nominees,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AwardSummary {
    pub category: String,
    pub display: String,
}

/// Nominations in first-seen order with their counts.
pub fn tally(nominees: &[PlayerId]) -> Vec<(&PlayerId, usize)> {
    let mut counts: Vec<(&PlayerId, usize)> = Vec::new();
    for player in nominees {
        match counts.iter_mut().find(|(p, _)| *p == player) {
            Some((_, n)) => *n += 1,
            None => counts.push((player, 1)),
        }
    }
    counts
}

pub fn tabulate_awards(nominations: &[AwardNomination]) -> Vec<AwardSummary> {
    nominations
        .iter()
        .map(|nom| {
            let display = if nom.nominees.is_empty() {
                "none".to_string()
            } else {
                match nom.style {
                    AwardStyle::Single => nom
                        .nominees
                        .iter()
                        .map(PlayerId::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                    AwardStyle::CountBased => tally(&nom.nominees)
                        .into_iter()
                        .map(|(p, n)| format!("{p}×{n}"))
                        .collect::<Vec<_>>()
                        .join(" "),
                }
            };
            AwardSummary {
                category: nom.category.clone(),
                display,
            }
        })
        .collect()
}
