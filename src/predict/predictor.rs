use super::*;
use crate::gesture::Gesture;
use crate::pattern::Pattern;

/// Weighted ensemble over [`Recency`], [`Response`] and [`Frequency`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Predictor {
    weights: Weights,
}

impl Predictor {
    pub const fn new(weights: Weights) -> Self {
        Self { weights }
    }
    pub const fn weights(&self) -> Weights {
        self.weights
    }
    /// Blended score of every gesture.
    pub fn scores(&self, pattern: &Pattern) -> Distribution {
        [
            Recency.estimate(pattern) * self.weights.recency(),
            Response.estimate(pattern) * self.weights.response(),
            Frequency.estimate(pattern) * self.weights.frequency(),
        ]
        .into_iter()
        .sum()
    }
    /// Most likely next opponent gesture.
    ///
    /// Before any observation every estimator is at its fallback, and the
    /// prior's slight lean toward Paper carries no information. The cold
    /// start therefore resolves on the exact uniform, which by catalog order
    /// is Scissors.
    pub fn forecast(&self, pattern: &Pattern) -> Gesture {
        match pattern.is_empty() {
            true => Distribution::uniform().argmax(),
            false => self.scores(pattern).argmax(),
        }
    }
    /// The agent's counter-pick against the forecast.
    pub fn counter(&self, pattern: &Pattern) -> Gesture {
        self.forecast(pattern).beaten_by()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Outcome;

    #[test]
    fn cold_start_forecasts_scissors() {
        let pattern = Pattern::default();
        let predictor = Predictor::default();
        assert_eq!(predictor.forecast(&pattern), Gesture::Scissors);
        assert_eq!(predictor.counter(&pattern), Gesture::Rock);
    }

    #[test]
    fn cold_start_ignores_weights() {
        let pattern = Pattern::default();
        let predictor = Predictor::new(Weights::new(0.0, 0.0, 1.0));
        assert_eq!(predictor.forecast(&pattern), Gesture::Scissors);
    }

    #[test]
    fn single_observation_dominates() {
        let mut pattern = Pattern::default();
        pattern.update(Gesture::Rock, None);
        let predictor = Predictor::default();
        let scores = predictor.scores(&pattern);
        assert!((scores.density(Gesture::Rock) - 0.6).abs() < 1e-6);
        assert_eq!(predictor.forecast(&pattern), Gesture::Rock);
        assert_eq!(predictor.counter(&pattern), Gesture::Paper);
    }

    #[test]
    fn weights_shift_the_forecast() {
        // lifetime favors Rock, the last three favor Paper
        let mut pattern = Pattern::default();
        pattern.update(Gesture::Rock, None);
        for _ in 0..4 {
            pattern.update(Gesture::Rock, Some(Outcome::Draw));
        }
        for _ in 0..3 {
            pattern.update(Gesture::Paper, Some(Outcome::Draw));
        }
        let trend = Predictor::new(Weights::new(1.0, 0.0, 0.0));
        let habit = Predictor::new(Weights::new(0.0, 0.0, 1.0));
        assert_eq!(trend.forecast(&pattern), Gesture::Paper);
        assert_eq!(habit.forecast(&pattern), Gesture::Rock);
    }

    #[test]
    fn default_blend_matches_hand_computation() {
        let mut pattern = Pattern::default();
        pattern.update(Gesture::Rock, None);
        pattern.update(Gesture::Paper, Some(Outcome::Win));
        // recency:   S 0, R .5, P .5
        // response:  S 0, R 0,  P 1/3
        // frequency: S 0, R .5, P .5
        let scores = Predictor::default().scores(&pattern);
        assert!((scores.density(Gesture::Rock) - 0.30).abs() < 1e-6);
        assert!((scores.density(Gesture::Paper) - (0.30 + 0.4 / 3.)).abs() < 1e-6);
        assert_eq!(scores.density(Gesture::Scissors), 0.0);
        assert_eq!(scores.argmax(), Gesture::Paper);
    }
}
