//! Hole-by-hole stakes settlement.
//!
//! Three formats share one result shape: field match play on raw strokes,
//! one-vs-one on handicap-adjusted strokes, and one anchor against up to
//! four opponents where every pairing carries its own bet.

pub mod allocation;
pub mod field_match;
pub mod stroke_play;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::CoreError;
use crate::model::{EventContext, PlayerId};
pub use allocation::{StrokeAllocation, stroke_holes};

pub const DEFAULT_FIELD_BET_UNIT: i64 = 50;
pub const DEFAULT_PAIR_BET: i64 = 100;
pub const MAX_OPPONENTS: usize = 4;
pub const BIRDIE_BONUS_MULTIPLIER: u8 = 2;

fn default_field_bet_unit() -> i64 {
    DEFAULT_FIELD_BET_UNIT
}

fn default_pair_bet() -> i64 {
    DEFAULT_PAIR_BET
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OpponentConfig {
    pub player: PlayerId,
    /// Falls back to the wager's `default_bet`.
    #[serde(default)]
    pub bet: Option<i64>,
    /// Falls back to the roster handicap.
    #[serde(default)]
    pub handicap: Option<i32>,
}

impl OpponentConfig {
    pub fn new(player: &str) -> Self {
        Self {
            player: PlayerId::new(player),
            bet: None,
            handicap: None,
        }
    }

    #[must_use]
    pub fn with_bet(mut self, bet: i64) -> Self {
        self.bet = Some(bet);
        self
    }

    #[must_use]
    pub fn with_handicap(mut self, handicap: i32) -> Self {
        self.handicap = Some(handicap);
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum WagerConfig {
    FieldMatchPlay {
        #[serde(default = "default_field_bet_unit")]
        bet_unit: i64,
    },
    OneVsOne {
        player_a: PlayerId,
        player_b: PlayerId,
        #[serde(default = "default_pair_bet")]
        bet: i64,
    },
    OneVsMany {
        anchor: PlayerId,
        #[serde(default = "default_pair_bet")]
        default_bet: i64,
        #[serde(default)]
        opponents: Vec<OpponentConfig>,
    },
}

impl WagerConfig {
    pub fn format(&self) -> WagerFormat {
        match self {
            Self::FieldMatchPlay { .. } => WagerFormat::FieldMatchPlay,
            Self::OneVsOne { .. } => WagerFormat::OneVsOne,
            Self::OneVsMany { .. } => WagerFormat::OneVsMany,
        }
    }

    /// Check roles and bets against the roster before anything settles.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidWager` for a non-positive bet, a player in two
    /// roles or too many opponents; `CoreError::UnknownPlayer` for names
    /// missing from the roster.
    pub fn validate(&self, ctx: &EventContext) -> Result<(), CoreError> {
        match self {
            Self::FieldMatchPlay { bet_unit } => check_bet(*bet_unit, "bet_unit"),
            Self::OneVsOne {
                player_a,
                player_b,
                bet,
            } => {
                check_bet(*bet, "bet")?;
                ctx.roster.require(player_a)?;
                ctx.roster.require(player_b)?;
                if player_a == player_b {
                    return Err(CoreError::InvalidWager(format!(
                        "{player_a} cannot play against themselves"
                    )));
                }
                Ok(())
            }
            Self::OneVsMany {
                anchor,
                default_bet,
                opponents,
            } => {
                check_bet(*default_bet, "default_bet")?;
                ctx.roster.require(anchor)?;
                if opponents.len() > MAX_OPPONENTS {
                    return Err(CoreError::InvalidWager(format!(
                        "{} opponents given, at most {MAX_OPPONENTS} allowed",
                        opponents.len()
                    )));
                }
                let mut seen: BTreeSet<&PlayerId> = BTreeSet::new();
                seen.insert(anchor);
                for opp in opponents {
                    ctx.roster.require(&opp.player)?;
                    if let Some(bet) = opp.bet {
                        check_bet(bet, "opponent bet")?;
                    }
                    if !seen.insert(&opp.player) {
                        return Err(CoreError::InvalidWager(format!(
                            "{} is selected in more than one role",
                            opp.player
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

fn check_bet(bet: i64, what: &str) -> Result<(), CoreError> {
    if bet > 0 {
        Ok(())
    } else {
        Err(CoreError::InvalidWager(format!(
            "{what} must be positive, got {bet}"
        )))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WagerFormat {
    FieldMatchPlay,
    OneVsOne,
    OneVsMany,
}

impl fmt::Display for WagerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WagerFormat::FieldMatchPlay => "field match play",
            WagerFormat::OneVsOne => "one vs one",
            WagerFormat::OneVsMany => "one vs many",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Matchup {
    pub anchor: PlayerId,
    pub opponent: PlayerId,
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.anchor, self.opponent)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HoleOutcome {
    Won { winner: PlayerId },
    Halved,
    Skipped,
}

impl fmt::Display for HoleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoleOutcome::Won { winner } => write!(f, "{winner}"),
            HoleOutcome::Halved => write!(f, "halved"),
            HoleOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleSettlement {
    pub hole: u8,
    pub par: u8,
    /// `None` for field match play.
    pub matchup: Option<Matchup>,
    pub outcome: HoleOutcome,
    pub multiplier: u8,
    pub stake_deltas: BTreeMap<PlayerId, i64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinLoseTie {
    pub win: u32,
    pub lose: u32,
    pub tie: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PairTerms {
    pub matchup: Matchup,
    pub bet: i64,
    pub anchor_handicap: i32,
    pub opponent_handicap: i32,
    pub allocation: StrokeAllocation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SettlementWarning {
    pub player: PlayerId,
    pub matchup: Option<Matchup>,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SettlementResult {
    pub format: WagerFormat,
    /// Ordered by hole, then by pairing order.
    pub holes: Vec<HoleSettlement>,
    pub pairs: Vec<PairTerms>,
    pub total_earnings: BTreeMap<PlayerId, i64>,
    pub records: BTreeMap<PlayerId, WinLoseTie>,
    pub warnings: Vec<SettlementWarning>,
}

impl SettlementResult {
    pub fn earnings(&self, player: &PlayerId) -> Option<i64> {
        self.total_earnings.get(player).copied()
    }

    pub fn record(&self, player: &PlayerId) -> Option<WinLoseTie> {
        self.records.get(player).copied()
    }

    pub fn holes_for<'a, 'm>(
        &'a self,
        matchup: Option<&'m Matchup>,
    ) -> impl Iterator<Item = &'a HoleSettlement> + 'm
    where
        'a: 'm,
    {
        self.holes
            .iter()
            .filter(move |h| h.matchup.as_ref() == matchup)
    }
}

/// Running totals while one settlement is computed. Created fresh for every
/// call so nothing carries between runs.
pub(crate) struct Ledger {
    format: WagerFormat,
    holes: Vec<HoleSettlement>,
    pairs: Vec<PairTerms>,
    total_earnings: BTreeMap<PlayerId, i64>,
    records: BTreeMap<PlayerId, WinLoseTie>,
    warnings: Vec<SettlementWarning>,
}

impl Ledger {
    pub(crate) fn new(format: WagerFormat) -> Self {
        Self {
            format,
            holes: Vec::new(),
            pairs: Vec::new(),
            total_earnings: BTreeMap::new(),
            records: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn enroll(&mut self, player: &PlayerId) {
        self.total_earnings.entry(player.clone()).or_insert(0);
        self.records.entry(player.clone()).or_default();
    }

    pub(crate) fn win(&mut self, player: &PlayerId) {
        self.records.entry(player.clone()).or_default().win += 1;
    }

    pub(crate) fn lose(&mut self, player: &PlayerId) {
        self.records.entry(player.clone()).or_default().lose += 1;
    }

    pub(crate) fn tie(&mut self, player: &PlayerId) {
        self.records.entry(player.clone()).or_default().tie += 1;
    }

    pub(crate) fn warn(&mut self, player: &PlayerId, matchup: Option<&Matchup>, message: String) {
        log::warn!("{player}: {message}");
        self.warnings.push(SettlementWarning {
            player: player.clone(),
            matchup: matchup.cloned(),
            message,
        });
    }

    pub(crate) fn add_pair(&mut self, terms: PairTerms) {
        self.pairs.push(terms);
    }

    pub(crate) fn push_hole(&mut self, hole: HoleSettlement) {
        for (player, delta) in &hole.stake_deltas {
            *self.total_earnings.entry(player.clone()).or_insert(0) += delta;
        }
        self.holes.push(hole);
    }

    pub(crate) fn finish(mut self) -> SettlementResult {
        // stable: pairing order survives within a hole
        self.holes.sort_by_key(|h| h.hole);
        SettlementResult {
            format: self.format,
            holes: self.holes,
            pairs: self.pairs,
            total_earnings: self.total_earnings,
            records: self.records,
            warnings: self.warnings,
        }
    }
}

/// Settle one wager over the event's cards.
///
/// # Errors
///
/// Propagates the configuration errors from [`WagerConfig::validate`].
/// Incomplete cards never error; they show up as skipped holes and
/// warnings.
pub fn settle(ctx: &EventContext, config: &WagerConfig) -> Result<SettlementResult, CoreError> {
    config.validate(ctx)?;
    let result = match config {
        WagerConfig::FieldMatchPlay { bet_unit } => field_match::settle_field(ctx, *bet_unit),
        WagerConfig::OneVsOne {
            player_a,
            player_b,
            bet,
        } => stroke_play::settle_one_vs_one(ctx, player_a, player_b, *bet)?,
        WagerConfig::OneVsMany {
            anchor,
            default_bet,
            opponents,
        } => stroke_play::settle_one_vs_many(ctx, anchor, *default_bet, opponents)?,
    };
    log::debug!(
        "{} settled: {} hole rows, {} warnings",
        result.format,
        result.holes.len(),
        result.warnings.len()
    );
    Ok(result)
}
