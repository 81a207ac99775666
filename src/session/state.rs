use super::*;
use crate::Round;
use crate::gesture::Gesture;
use crate::pattern::Pattern;

/// Everything a session knows. Owned by exactly one [`Session`] and only
/// mutated through its round controller methods.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct State {
    round: Round,
    history: Vec<Record>,
    phase: Phase,
    pattern: Pattern,
}

impl Default for State {
    fn default() -> Self {
        Self {
            round: 1,
            history: Vec::new(),
            phase: Phase::Idle,
            pattern: Pattern::default(),
        }
    }
}

impl State {
    /// Number of the current (or next) round.
    pub fn round(&self) -> Round {
        self.round
    }
    /// Completed rounds in chronological order.
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Commit the agent's gesture for the current round.
    pub(super) fn begin(&mut self, agent: Gesture) {
        self.phase = Phase::Active(agent);
    }
    /// Close the current round: learn from it, archive it, move on.
    /// The pattern update reads the outcome of the round before this one.
    pub(super) fn conclude(&mut self, record: Record) {
        let previous = self.history.last().map(Record::outcome);
        self.pattern.update(record.opponent(), previous);
        self.history.push(record);
        self.round += 1;
        self.phase = Phase::Idle;
    }
}
