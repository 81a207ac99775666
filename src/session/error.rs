use crate::Round;

/// Rejected session calls. Every variant is raised before any state is
/// touched, so the caller can re-query the session and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `start_round` while the given round is still awaiting its outcome.
    AlreadyInProgress(Round),
    /// `report_outcome` with no round in progress.
    NoActiveRound,
    /// Outcome text that is not Win, Lose or Draw.
    InvalidOutcome(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInProgress(r) => write!(f, "round {} is already in progress", r),
            Self::NoActiveRound => write!(f, "no round in progress"),
            Self::InvalidOutcome(s) => write!(f, "invalid outcome: {}", s),
        }
    }
}

impl std::error::Error for SessionError {}
