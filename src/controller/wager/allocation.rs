use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{CourseSelection, HOLES_PER_ROUND, Hole, PlayerId};

/// The `strokes` hardest holes by stroke index, returned in hole order.
/// Equal stroke indexes keep course order. Never more than 18 holes.
pub fn stroke_holes(course: &CourseSelection, strokes: u32) -> BTreeSet<u8> {
    let mut by_difficulty: Vec<&Hole> = course.holes().iter().collect();
    by_difficulty.sort_by_key(|h| h.stroke_index);
    let take = usize::try_from(strokes)
        .unwrap_or(HOLES_PER_ROUND)
        .min(HOLES_PER_ROUND);
    by_difficulty
        .into_iter()
        .take(take)
        .map(|h| h.number)
        .collect()
}

/// Handicap strokes for one pairing. Only the higher handicap receives
/// strokes, one per allocated hole.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StrokeAllocation {
    pub receiver: Option<PlayerId>,
    pub holes: BTreeSet<u8>,
}

impl StrokeAllocation {
    pub fn between(
        course: &CourseSelection,
        (a, hcp_a): (&PlayerId, i32),
        (b, hcp_b): (&PlayerId, i32),
    ) -> Self {
        let receiver = match hcp_a.cmp(&hcp_b) {
            std::cmp::Ordering::Greater => Some(a.clone()),
            std::cmp::Ordering::Less => Some(b.clone()),
            std::cmp::Ordering::Equal => None,
        };
        let holes = match receiver {
            Some(_) => stroke_holes(course, hcp_a.abs_diff(hcp_b)),
            None => BTreeSet::new(),
        };
        log::debug!(
            "{a} ({hcp_a}) vs {b} ({hcp_b}): {} receives strokes on {:?}",
            receiver.as_ref().map_or("nobody", PlayerId::as_str),
            holes
        );
        Self { receiver, holes }
    }

    pub fn strokes_on(&self, player: &PlayerId, hole: u8) -> i64 {
        if self.receiver.as_ref() == Some(player) && self.holes.contains(&hole) {
            1
        } else {
            0
        }
    }

    pub fn adjusted(&self, player: &PlayerId, hole: u8, raw: u32) -> i64 {
        i64::from(raw) - self.strokes_on(player, hole)
    }
}
