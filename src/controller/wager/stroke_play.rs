use std::collections::BTreeMap;

use super::{
    BIRDIE_BONUS_MULTIPLIER, HoleOutcome, HoleSettlement, Ledger, Matchup, OpponentConfig,
    PairTerms, SettlementResult, StrokeAllocation, WagerFormat,
};
use crate::error::CoreError;
use crate::model::{EventContext, PlayerId};

/// Two-player handicap match, flat bet per hole.
///
/// # Errors
///
/// Returns `CoreError::UnknownPlayer` if either name is off the roster.
pub fn settle_one_vs_one(
    ctx: &EventContext,
    player_a: &PlayerId,
    player_b: &PlayerId,
    bet: i64,
) -> Result<SettlementResult, CoreError> {
    let a = ctx.roster.require(player_a)?;
    let b = ctx.roster.require(player_b)?;
    let terms = pair_terms(ctx, (&a.id, a.handicap), (&b.id, b.handicap), bet);

    let mut ledger = Ledger::new(WagerFormat::OneVsOne);
    settle_pair(ctx, &terms, false, &mut ledger);
    ledger.add_pair(terms);
    Ok(ledger.finish())
}

/// One anchor against each opponent separately. Stakes are never pooled:
/// each pairing uses its own bet and its own stroke allocation, and a
/// birdie-or-better on raw strokes doubles that hole's stake.
///
/// # Errors
///
/// Returns `CoreError::UnknownPlayer` if any name is off the roster.
pub fn settle_one_vs_many(
    ctx: &EventContext,
    anchor: &PlayerId,
    default_bet: i64,
    opponents: &[OpponentConfig],
) -> Result<SettlementResult, CoreError> {
    let anchor = ctx.roster.require(anchor)?;
    let mut ledger = Ledger::new(WagerFormat::OneVsMany);

    for opp in opponents {
        let player = ctx.roster.require(&opp.player)?;
        let handicap = opp.handicap.unwrap_or(player.handicap);
        let terms = pair_terms(
            ctx,
            (&anchor.id, anchor.handicap),
            (&player.id, handicap),
            opp.bet.unwrap_or(default_bet),
        );
        settle_pair(ctx, &terms, true, &mut ledger);
        ledger.add_pair(terms);
    }

    Ok(ledger.finish())
}

fn pair_terms(
    ctx: &EventContext,
    anchor: (&PlayerId, i32),
    opponent: (&PlayerId, i32),
    bet: i64,
) -> PairTerms {
    PairTerms {
        matchup: Matchup {
            anchor: anchor.0.clone(),
            opponent: opponent.0.clone(),
        },
        bet,
        anchor_handicap: anchor.1,
        opponent_handicap: opponent.1,
        allocation: StrokeAllocation::between(&ctx.course, anchor, opponent),
    }
}

fn settle_pair(ctx: &EventContext, terms: &PairTerms, birdie_bonus: bool, ledger: &mut Ledger) {
    let matchup = &terms.matchup;
    let anchor_line = ctx.scores.line(&matchup.anchor);
    let opponent_line = ctx.scores.line(&matchup.opponent);

    for (player, line) in [
        (&matchup.anchor, anchor_line),
        (&matchup.opponent, opponent_line),
    ] {
        match line {
            Some(_) => ledger.enroll(player),
            None => ledger.warn(
                player,
                Some(matchup),
                format!("incomplete card, {matchup} skipped"),
            ),
        }
    }

    for hole in ctx.course.holes() {
        let mut settlement = HoleSettlement {
            hole: hole.number,
            par: hole.par,
            matchup: Some(matchup.clone()),
            outcome: HoleOutcome::Skipped,
            multiplier: 1,
            stake_deltas: BTreeMap::new(),
        };

        let raw = anchor_line
            .and_then(|l| l.on_hole(hole.number))
            .zip(opponent_line.and_then(|l| l.on_hole(hole.number)));
        let Some((anchor_raw, opponent_raw)) = raw else {
            ledger.push_hole(settlement);
            continue;
        };

        let anchor_adj = terms
            .allocation
            .adjusted(&matchup.anchor, hole.number, anchor_raw);
        let opponent_adj = terms
            .allocation
            .adjusted(&matchup.opponent, hole.number, opponent_raw);

        let (winner, loser, winner_raw) = match anchor_adj.cmp(&opponent_adj) {
            std::cmp::Ordering::Less => (&matchup.anchor, &matchup.opponent, anchor_raw),
            std::cmp::Ordering::Greater => (&matchup.opponent, &matchup.anchor, opponent_raw),
            std::cmp::Ordering::Equal => {
                ledger.tie(&matchup.anchor);
                ledger.tie(&matchup.opponent);
                settlement.outcome = HoleOutcome::Halved;
                ledger.push_hole(settlement);
                continue;
            }
        };

        if birdie_bonus && winner_raw < u32::from(hole.par) {
            settlement.multiplier = BIRDIE_BONUS_MULTIPLIER;
        }
        let stake = terms.bet * i64::from(settlement.multiplier);
        settlement.stake_deltas.insert(winner.clone(), stake);
        settlement.stake_deltas.insert(loser.clone(), -stake);
        settlement.outcome = HoleOutcome::Won {
            winner: winner.clone(),
        };
        ledger.win(winner);
        ledger.lose(loser);
        ledger.push_hole(settlement);
    }
}
