pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod view;

pub use controller::{EventReport, build_event_report, compute_leaderboard, settle};
pub use error::CoreError;
pub use model::{EventContext, PlayerId};
