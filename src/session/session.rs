use super::*;
use crate::gesture::Outcome;
use crate::predict::*;

/// Round controller for one game against one opponent.
///
/// ```text
///            start_round()
///   Idle ─────────────────▶ Active(agent)
///    ▲                          │
///    └──────────────────────────┘
///          report_outcome(o)
/// ```
///
/// `reset()` returns to a fresh `Idle` from anywhere.
#[derive(Debug, Default, Clone)]
pub struct Session {
    state: State,
    predictor: Predictor,
}

impl Session {
    pub fn new(weights: Weights) -> Self {
        Self {
            state: State::default(),
            predictor: Predictor::new(weights),
        }
    }

    /// Forecast the opponent and commit to the counter.
    pub fn start_round(&mut self) -> Result<Opening, SessionError> {
        if self.state.phase().is_active() {
            return Err(SessionError::AlreadyInProgress(self.state.round()));
        }
        let forecast = self.predictor.forecast(self.state.pattern());
        let agent = forecast.beaten_by();
        log::debug!(
            "round {} forecast {} [{}] countering with {}",
            self.state.round(),
            forecast,
            self.predictor.scores(self.state.pattern()),
            agent
        );
        self.state.begin(agent);
        Ok(Opening {
            round: self.state.round(),
            agent,
        })
    }

    /// Close the active round with the opponent's reported outcome.
    pub fn report_outcome(&mut self, outcome: Outcome) -> Result<Verdict, SessionError> {
        let agent = self.state.phase().agent().ok_or(SessionError::NoActiveRound)?;
        let record = Record::new(self.state.round(), agent, outcome, crate::now());
        let verdict = Verdict {
            round: record.round(),
            opponent: record.opponent(),
            description: record.describe(),
        };
        log::debug!("{}", record);
        self.state.conclude(record);
        Ok(verdict)
    }

    /// [`Session::report_outcome`] from untrusted text.
    pub fn report_raw(&mut self, outcome: &str) -> Result<Verdict, SessionError> {
        if !self.state.phase().is_active() {
            return Err(SessionError::NoActiveRound);
        }
        let outcome = Outcome::try_from(outcome)
            .map_err(|_| SessionError::InvalidOutcome(outcome.to_string()))?;
        self.report_outcome(outcome)
    }

    pub fn analysis(&self) -> Analysis {
        Analysis::from(self.state.pattern())
    }

    /// Forget everything learned, abandoning any round in progress.
    /// Weights are configuration and survive.
    pub fn reset(&mut self) {
        log::info!("session reset after {} rounds", self.state.history().len());
        self.state = State::default();
    }

    pub fn state(&self) -> &State {
        &self.state
    }
    pub fn weights(&self) -> Weights {
        self.predictor.weights()
    }
}
