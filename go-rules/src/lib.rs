pub mod board;
pub mod error;
pub mod handicap;
pub mod ko;
pub mod notation;
pub mod replay;
pub mod sgf;
pub mod stone;

/// A board coordinate `(x, y)` with `(0, 0)` at the top-left corner.
pub type Point = (u8, u8);

pub use board::{Board, Captures, MoveAnalysis, MoveOptions};
pub use error::GoError;
pub use handicap::HandicapStyle;
pub use ko::Ko;
pub use replay::{ReplayError, replay};
pub use stone::Stone;
