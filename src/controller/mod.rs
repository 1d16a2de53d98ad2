pub mod awards;
pub mod event;
pub mod leaderboard;
pub mod loader;
pub mod placement;
pub mod wager;

pub use awards::*;
pub use event::*;
pub use leaderboard::*;
pub use loader::*;
pub use placement::*;
pub use wager::{
    HoleOutcome, HoleSettlement, Matchup, OpponentConfig, SettlementResult, WagerConfig,
    WagerFormat, WinLoseTie, settle,
};
