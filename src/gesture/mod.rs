//! The closed gesture catalog and the outcome relation over it.
pub mod gesture;
pub use gesture::*;

pub mod outcome;
pub use outcome::*;
