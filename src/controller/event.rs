use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::awards::{AwardNomination, AwardSummary, tabulate_awards};
use super::leaderboard::{Leaderboard, compute_leaderboard};
use super::wager::{SettlementResult, WagerConfig, settle};
use crate::error::CoreError;
use crate::model::EventContext;

/// Everything produced for one event, ready for the reporters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventReport {
    pub course_name: String,
    pub front_area: String,
    pub back_area: String,
    pub date: Option<NaiveDate>,
    pub total_par: u32,
    pub leaderboard: Leaderboard,
    pub settlements: Vec<SettlementResult>,
    pub awards: Vec<AwardSummary>,
}

/// Run every stage over `ctx`. Each wager is validated before any of them
/// settles, so a bad setup fails the whole step.
///
/// # Errors
///
/// Returns the first configuration error from the wager list.
pub fn build_event_report(
    ctx: &EventContext,
    wagers: &[WagerConfig],
    nominations: &[AwardNomination],
) -> Result<EventReport, CoreError> {
    for wager in wagers {
        wager.validate(ctx)?;
    }

    let leaderboard = compute_leaderboard(ctx);
    let settlements = wagers
        .iter()
        .map(|w| settle(ctx, w))
        .collect::<Result<Vec<_>, _>>()?;
    let awards = tabulate_awards(nominations);

    Ok(EventReport {
        course_name: ctx.course.course_name.clone(),
        front_area: ctx.course.front_area.clone(),
        back_area: ctx.course.back_area.clone(),
        date: ctx.date,
        total_par: ctx.course.total_par(),
        leaderboard,
        settlements,
        awards,
    })
}
