use std::collections::BTreeMap;

use super::{HoleOutcome, HoleSettlement, Ledger, SettlementResult, WagerFormat};
use crate::model::{EventContext, PlayerId, ScoreLine};

/// Everyone against everyone on raw strokes. A sole low score collects
/// `bet_unit` and every other player pays `bet_unit`, so with more than two
/// players the pot does not balance. Shared low scores carry nothing.
pub fn settle_field(ctx: &EventContext, bet_unit: i64) -> SettlementResult {
    let mut ledger = Ledger::new(WagerFormat::FieldMatchPlay);

    for player in ctx.scores.incomplete_players() {
        ledger.warn(
            player,
            None,
            "incomplete card, left out of field match play".to_string(),
        );
    }

    let field: Vec<&ScoreLine> = ctx.scored_players().map(|(_, line)| line).collect();
    for line in &field {
        ledger.enroll(&line.player);
    }
    if field.len() < 2 {
        log::warn!("field match play needs two complete cards, every hole skipped");
    }

    for hole in ctx.course.holes() {
        let strokes: Vec<(&PlayerId, u32)> = field
            .iter()
            .filter_map(|line| line.on_hole(hole.number).map(|s| (&line.player, s)))
            .collect();

        let mut settlement = HoleSettlement {
            hole: hole.number,
            par: hole.par,
            matchup: None,
            outcome: HoleOutcome::Skipped,
            multiplier: 1,
            stake_deltas: BTreeMap::new(),
        };

        let low = match strokes.iter().map(|&(_, s)| s).min() {
            Some(low) if strokes.len() >= 2 => low,
            _ => {
                ledger.push_hole(settlement);
                continue;
            }
        };

        let low_scorers: Vec<&PlayerId> = strokes
            .iter()
            .filter(|&&(_, s)| s == low)
            .map(|&(p, _)| p)
            .collect();

        if let [winner] = low_scorers.as_slice() {
            for &(player, _) in &strokes {
                if player == *winner {
                    settlement.stake_deltas.insert(player.clone(), bet_unit);
                    ledger.win(player);
                } else {
                    settlement.stake_deltas.insert(player.clone(), -bet_unit);
                    ledger.lose(player);
                }
            }
            settlement.outcome = HoleOutcome::Won {
                winner: (*winner).clone(),
            };
        } else {
            for &(player, _) in &strokes {
                ledger.tie(player);
            }
            settlement.outcome = HoleOutcome::Halved;
        }
        ledger.push_hole(settlement);
    }

    ledger.finish()
}
