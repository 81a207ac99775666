use crate::gesture::Gesture;
use crate::session::Record;

/// Anything that can throw a gesture given the rounds played so far.
pub trait Opponent {
    fn throw(&mut self, history: &[Record]) -> Gesture;
}
