//! Sparring partners for the agent.
//!
//! A [`Robot`] throws real gestures so that a [`Bout`] can compute the
//! outcome the way a human would report it. The [`Human`] only ever reports
//! outcomes; the agent never learns what they actually threw.
pub mod bout;
pub use bout::*;

pub mod opponent;
pub use opponent::*;

pub mod robot;
pub use robot::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;
