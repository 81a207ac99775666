use super::*;
use crate::Probability;
use crate::RECENCY_SLICE;
use crate::gesture::*;
use crate::pattern::*;

/// Reads the opponent model and estimates the next gesture.
pub trait Estimator {
    fn estimate(&self, pattern: &Pattern) -> Distribution;
}

/// Short-term trend: shares within the last [`RECENCY_SLICE`] gestures.
#[derive(Debug, Default, Clone, Copy)]
pub struct Recency;

/// How the opponent reacts to the previous round's outcome: the share of each
/// gesture in the after-win, after-lose and after-draw tallies, averaged.
/// Empty tallies contribute zero rather than a prior.
#[derive(Debug, Default, Clone, Copy)]
pub struct Response;

/// Lifetime shares of each gesture.
#[derive(Debug, Default, Clone, Copy)]
pub struct Frequency;

impl Estimator for Recency {
    fn estimate(&self, pattern: &Pattern) -> Distribution {
        let tally = pattern.trailing(RECENCY_SLICE).collect::<Tally>();
        match tally.is_empty() {
            true => Distribution::prior(),
            false => Distribution::from(&tally),
        }
    }
}

impl Estimator for Response {
    fn estimate(&self, pattern: &Pattern) -> Distribution {
        let n = Outcome::ALL.len() as Probability;
        Outcome::ALL
            .iter()
            .map(|outcome| Distribution::from(pattern.after(*outcome)))
            .sum::<Distribution>()
            * (1. / n)
    }
}

impl Estimator for Frequency {
    fn estimate(&self, pattern: &Pattern) -> Distribution {
        match pattern.overall().is_empty() {
            true => Distribution::prior(),
            false => Distribution::from(pattern.overall()),
        }
    }
}
