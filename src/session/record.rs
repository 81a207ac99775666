use crate::Millis;
use crate::Round;
use crate::gesture::*;

/// One completed round. Immutable once appended to the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Record {
    round: Round,
    agent: Gesture,
    opponent: Gesture,
    outcome: Outcome,
    timestamp: Millis,
}

impl Record {
    pub fn new(round: Round, agent: Gesture, outcome: Outcome, timestamp: Millis) -> Self {
        Self {
            round,
            agent,
            opponent: outcome.infer(agent),
            outcome,
            timestamp,
        }
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn agent(&self) -> Gesture {
        self.agent
    }
    /// Inferred from the agent's gesture and the reported outcome.
    pub fn opponent(&self) -> Gesture {
        self.opponent
    }
    /// From the opponent's perspective.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn timestamp(&self) -> Millis {
        self.timestamp
    }
    pub fn describe(&self) -> String {
        self.outcome.describe(self.agent, self.opponent)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{:<4} agent {:<8} opponent {:<8} {}",
            self.round, self.agent, self.opponent, self.outcome
        )
    }
}
