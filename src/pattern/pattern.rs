use super::*;
use crate::RECENT_WINDOW;
use crate::gesture::*;
use std::collections::VecDeque;

/// Everything the agent has learned about its opponent this session.
///
/// - `recent` keeps the last [`RECENT_WINDOW`] inferred gestures, oldest first.
/// - `after_*` count what the opponent chose in the round immediately
///   following a round that ended in that outcome.
/// - `overall` counts every inferred gesture.
///
/// The first round of a session feeds `recent` and `overall` only, so the
/// after-outcome tallies always sum to one less than `overall` once play
/// has started.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Pattern {
    recent: VecDeque<Gesture>,
    after_win: Tally,
    after_lose: Tally,
    after_draw: Tally,
    overall: Tally,
}

impl Pattern {
    /// Fold one inferred opponent gesture into the model. `previous` is the
    /// outcome of the round before the one being recorded, absent on the
    /// first round.
    pub fn update(&mut self, opponent: Gesture, previous: Option<Outcome>) {
        self.recent.push_back(opponent);
        while self.recent.len() > RECENT_WINDOW {
            self.recent.pop_front();
        }
        if let Some(outcome) = previous {
            self.after_mut(outcome).increment(opponent);
        }
        self.overall.increment(opponent);
    }

    /// Recency window, oldest first.
    pub fn recent(&self) -> &VecDeque<Gesture> {
        &self.recent
    }
    /// The last `n` gestures of the window (fewer if the window is shorter).
    pub fn trailing(&self, n: usize) -> impl Iterator<Item = Gesture> + '_ {
        self.recent
            .iter()
            .copied()
            .skip(self.recent.len().saturating_sub(n))
    }
    /// What the opponent chose after rounds ending in `outcome`.
    pub fn after(&self, outcome: Outcome) -> &Tally {
        match outcome {
            Outcome::Win => &self.after_win,
            Outcome::Lose => &self.after_lose,
            Outcome::Draw => &self.after_draw,
        }
    }
    /// Lifetime frequency of each gesture.
    pub fn overall(&self) -> &Tally {
        &self.overall
    }
    /// No round has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.overall.is_empty()
    }

    fn after_mut(&mut self, outcome: Outcome) -> &mut Tally {
        match outcome {
            Outcome::Win => &mut self.after_win,
            Outcome::Lose => &mut self.after_lose,
            Outcome::Draw => &mut self.after_draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(pattern: &Pattern) -> usize {
        Outcome::ALL
            .iter()
            .map(|o| pattern.after(*o).total())
            .sum()
    }

    #[test]
    fn first_update_skips_response_tallies() {
        let mut pattern = Pattern::default();
        pattern.update(Gesture::Rock, None);
        assert_eq!(pattern.overall().count(Gesture::Rock), 1);
        assert_eq!(pattern.recent().len(), 1);
        assert_eq!(responses(&pattern), 0);
        assert!(!pattern.is_empty());
    }

    #[test]
    fn previous_outcome_selects_tally() {
        let mut pattern = Pattern::default();
        pattern.update(Gesture::Rock, None);
        pattern.update(Gesture::Paper, Some(Outcome::Lose));
        pattern.update(Gesture::Paper, Some(Outcome::Lose));
        pattern.update(Gesture::Scissors, Some(Outcome::Win));
        assert_eq!(pattern.after(Outcome::Lose).count(Gesture::Paper), 2);
        assert_eq!(pattern.after(Outcome::Win).count(Gesture::Scissors), 1);
        assert!(pattern.after(Outcome::Draw).is_empty());
        assert_eq!(responses(&pattern), 3);
        assert_eq!(pattern.overall().total(), 4);
    }

    #[test]
    fn window_evicts_oldest() {
        let mut pattern = Pattern::default();
        pattern.update(Gesture::Paper, None);
        for _ in 0..RECENT_WINDOW {
            pattern.update(Gesture::Rock, Some(Outcome::Draw));
        }
        assert_eq!(pattern.recent().len(), RECENT_WINDOW);
        assert!(!pattern.recent().contains(&Gesture::Paper));
        assert_eq!(pattern.overall().count(Gesture::Paper), 1);
    }

    #[test]
    fn trailing_takes_newest() {
        let mut pattern = Pattern::default();
        for g in [Gesture::Scissors, Gesture::Rock, Gesture::Paper, Gesture::Rock] {
            pattern.update(g, None);
        }
        let tail = pattern.trailing(3).collect::<Vec<_>>();
        assert_eq!(tail, vec![Gesture::Rock, Gesture::Paper, Gesture::Rock]);
        assert_eq!(pattern.trailing(10).count(), 4);
    }
}
