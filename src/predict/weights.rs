use crate::*;

/// Ensemble weights for the three estimators.
///
/// Fixed for the lifetime of a session. Fields are private so a session's
/// weighting cannot drift between rounds; build alternatives with
/// [`Weights::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Weights {
    recency: Probability,
    response: Probability,
    frequency: Probability,
}

impl Weights {
    pub const fn new(recency: Probability, response: Probability, frequency: Probability) -> Self {
        Self {
            recency,
            response,
            frequency,
        }
    }
    pub const fn recency(&self) -> Probability {
        self.recency
    }
    pub const fn response(&self) -> Probability {
        self.response
    }
    pub const fn frequency(&self) -> Probability {
        self.frequency
    }
    pub fn total(&self) -> Probability {
        self.recency + self.response + self.frequency
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::new(WEIGHT_RECENCY, WEIGHT_RESPONSE, WEIGHT_FREQUENCY)
    }
}

impl std::fmt::Display for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "recency {:.2} / response {:.2} / frequency {:.2}",
            self.recency, self.response, self.frequency
        )
    }
}
