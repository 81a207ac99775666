use crate::Probability;
use crate::gesture::Gesture;
use std::ops::AddAssign;

/// Per-gesture counter.
///
/// The sum of the counts is the number of observations folded in.
/// The count of a gesture is the number of times it was observed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tally([usize; 3]);

impl Tally {
    /// observations of a single gesture
    pub fn count(&self, g: Gesture) -> usize {
        self.0[usize::from(g)]
    }
    /// observations across all gestures
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
    /// fraction of observations that were `g`.
    /// an empty tally divides by one, so every share is zero.
    pub fn share(&self, g: Gesture) -> Probability {
        self.count(g) as Probability / self.total().max(1) as Probability
    }
    /// record one more observation of `g`
    pub fn increment(&mut self, g: Gesture) {
        self.0[usize::from(g)].add_assign(1);
    }
    /// (gesture, count) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Gesture, usize)> + '_ {
        Gesture::ALL.into_iter().map(|g| (g, self.count(g)))
    }
}

impl FromIterator<Gesture> for Tally {
    fn from_iter<I: IntoIterator<Item = Gesture>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut tally, g| {
            tally.increment(g);
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_shares_are_zero() {
        let tally = Tally::default();
        assert!(tally.is_empty());
        for g in Gesture::ALL {
            assert_eq!(tally.share(g), 0.0);
        }
    }

    #[test]
    fn shares_follow_counts() {
        let tally = [Gesture::Rock, Gesture::Rock, Gesture::Paper, Gesture::Rock]
            .into_iter()
            .collect::<Tally>();
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.count(Gesture::Rock), 3);
        assert_eq!(tally.share(Gesture::Rock), 0.75);
        assert_eq!(tally.share(Gesture::Paper), 0.25);
        assert_eq!(tally.share(Gesture::Scissors), 0.0);
    }
}
