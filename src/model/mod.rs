pub mod course;
pub mod event;
pub mod player;
pub mod score;

pub use course::*;
pub use event::*;
pub use player::*;
pub use score::*;
