use crate::Round;
use crate::gesture::Gesture;

/// Returned by `start_round`: the agent has committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Opening {
    pub round: Round,
    pub agent: Gesture,
}

/// Returned by `report_outcome`: what the agent learned from the round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Verdict {
    pub round: Round,
    pub opponent: Gesture,
    pub description: String,
}

impl std::fmt::Display for Opening {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Round {} started! I chose {}.", self.round, self.agent)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}
