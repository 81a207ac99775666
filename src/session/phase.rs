use crate::gesture::Gesture;

/// Round controller state. The agent's gesture exists exactly
/// while a round is waiting for its outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Active(Gesture),
}

impl Phase {
    pub fn agent(&self) -> Option<Gesture> {
        match self {
            Phase::Idle => None,
            Phase::Active(g) => Some(*g),
        }
    }
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active(_))
    }
}
