//! Rolling statistics of the opponent's inferred gestures.
pub mod pattern;
pub use pattern::*;

pub mod tally;
pub use tally::*;
