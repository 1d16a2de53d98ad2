use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::placement::{Placement, resolve_placement};
use crate::model::{CourseSelection, EventContext, PlayerId, ScoreDisplay, ScoreLine};

/// Totals and ranks for one player with a complete card.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub player: PlayerId,
    pub handicap: i32,
    pub champion_ineligible: bool,
    pub runnerup_ineligible: bool,
    pub gross_total: u32,
    pub net_total: i32,
    pub gross_rank: u32,
    pub net_rank: u32,
    pub birdie_holes: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player: PlayerId,
    pub handicap: i32,
    pub gross_total: u32,
    pub net_total: i32,
    pub gross_rank: u32,
    pub net_rank: u32,
    pub birdie_holes: Vec<u8>,
    pub handicap_delta: i32,
    pub new_handicap: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    /// Ordered by net rank, then gross total, then name.
    pub entries: Vec<LeaderboardEntry>,
    pub placement: Placement,
    /// Players whose entered card is incomplete, in roster order. Roster
    /// players with no card at all are not listed.
    pub excluded: Vec<PlayerId>,
}

impl Leaderboard {
    pub fn entry(&self, player: &PlayerId) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| &e.player == player)
    }

    /// `(player, hole)` pairs ordered by hole number.
    pub fn birdies(&self) -> Vec<(PlayerId, u8)> {
        let mut pairs: Vec<(PlayerId, u8)> = self
            .entries
            .iter()
            .flat_map(|e| e.birdie_holes.iter().map(|&h| (e.player.clone(), h)))
            .collect();
        pairs.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        pairs
    }

    /// Birdie holes grouped per player, players in first-birdie order.
    pub fn birdies_by_player(&self) -> Vec<(PlayerId, Vec<u8>)> {
        let mut grouped: Vec<(PlayerId, Vec<u8>)> = Vec::new();
        for (player, hole) in self.birdies() {
            match grouped.iter_mut().find(|(p, _)| *p == player) {
                Some((_, holes)) => holes.push(hole),
                None => grouped.push((player, vec![hole])),
            }
        }
        grouped
    }
}

pub fn net_total(gross: u32, handicap: i32) -> i32 {
    i32::try_from(gross).unwrap_or(i32::MAX) - handicap
}

/// Holes finished exactly one under par. Eagles and pars do not count.
pub fn birdie_holes(course: &CourseSelection, line: &ScoreLine) -> Vec<u8> {
    course
        .holes()
        .iter()
        .filter(|hole| {
            line.on_hole(hole.number)
                .is_some_and(|s| ScoreDisplay::for_hole(s, hole) == ScoreDisplay::Birdie)
        })
        .map(|hole| hole.number)
        .collect()
}

/// Standard competition ranking, lower value ranks first: tied values share
/// the best rank, and the next value ranks one past everyone ahead of it.
pub fn min_ranks<T: Ord>(values: &[T]) -> Vec<u32> {
    values
        .iter()
        .map(|v| {
            let ahead = values.iter().filter(|other| *other < v).count();
            u32::try_from(ahead + 1).unwrap_or(u32::MAX)
        })
        .collect()
}

pub fn compute_standings(ctx: &EventContext) -> Vec<Standing> {
    let scored: Vec<_> = ctx.scored_players().collect();
    let gross: Vec<u32> = scored.iter().map(|(_, line)| line.gross()).collect();
    let net: Vec<i32> = scored
        .iter()
        .zip(&gross)
        .map(|((p, _), &g)| net_total(g, p.handicap))
        .collect();
    let gross_ranks = min_ranks(&gross);
    let net_ranks = min_ranks(&net);

    scored
        .iter()
        .enumerate()
        .map(|(i, (player, line))| Standing {
            player: player.id.clone(),
            handicap: player.handicap,
            champion_ineligible: player.champion_ineligible,
            runnerup_ineligible: player.runnerup_ineligible,
            gross_total: gross[i],
            net_total: net[i],
            gross_rank: gross_ranks[i],
            net_rank: net_ranks[i],
            birdie_holes: birdie_holes(&ctx.course, line),
        })
        .collect()
}

/// Full stroke-play result for the event, recomputed from scratch.
#[must_use]
pub fn compute_leaderboard(ctx: &EventContext) -> Leaderboard {
    let standings = compute_standings(ctx);
    let placement = resolve_placement(&standings);

    let excluded: Vec<PlayerId> = ctx
        .roster
        .iter()
        .filter(|p| {
            ctx.scores
                .entry(&p.id)
                .is_some_and(|e| e.line().is_none())
        })
        .map(|p| p.id.clone())
        .collect();
    for player in &excluded {
        log::warn!("{player} has an incomplete card and is left off the leaderboard");
    }

    let deltas: BTreeMap<&PlayerId, i32> = standings
        .iter()
        .map(|s| (&s.player, placement.handicap_delta(&s.player)))
        .collect();

    let mut entries: Vec<LeaderboardEntry> = standings
        .iter()
        .map(|s| {
            let delta = deltas.get(&s.player).copied().unwrap_or(0);
            LeaderboardEntry {
                player: s.player.clone(),
                handicap: s.handicap,
                gross_total: s.gross_total,
                net_total: s.net_total,
                gross_rank: s.gross_rank,
                net_rank: s.net_rank,
                birdie_holes: s.birdie_holes.clone(),
                handicap_delta: delta,
                new_handicap: s.handicap + delta,
            }
        })
        .collect();
    entries.sort_by(|a, b| {
        a.net_rank
            .cmp(&b.net_rank)
            .then_with(|| a.gross_total.cmp(&b.gross_total))
            .then_with(|| a.player.cmp(&b.player))
    });

    log::debug!(
        "leaderboard: {} ranked, {} excluded",
        entries.len(),
        excluded.len()
    );

    Leaderboard {
        entries,
        placement,
        excluded,
    }
}
