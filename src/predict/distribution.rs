use crate::PRIOR;
use crate::Probability;
use crate::gesture::Gesture;
use crate::pattern::Tally;
use std::ops::Add;
use std::ops::Mul;

/// Scores over the gesture catalog, indexed in catalog order.
///
/// Estimators emit normalized distributions when they have data. The
/// response estimator and the blended ensemble scores need not sum to one,
/// so nothing here enforces normalization.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Distribution([Probability; 3]);

impl Distribution {
    /// fallback for estimators without data
    pub const fn prior() -> Self {
        Self(PRIOR)
    }
    /// exact uniform, where arg-max resolves purely by catalog order
    pub const fn uniform() -> Self {
        Self([1. / 3.; 3])
    }
    pub fn density(&self, g: Gesture) -> Probability {
        self.0[usize::from(g)]
    }
    pub fn mass(&self) -> Probability {
        self.0.iter().sum()
    }
    /// (gesture, score) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Gesture, Probability)> + '_ {
        Gesture::ALL.into_iter().map(|g| (g, self.density(g)))
    }
    /// Highest-scoring gesture. Only a strictly greater score displaces the
    /// incumbent, so ties go to the earlier gesture in catalog order.
    pub fn argmax(&self) -> Gesture {
        self.iter()
            .fold((Gesture::ALL[0], Probability::NEG_INFINITY), |best, next| {
                if next.1 > best.1 { next } else { best }
            })
            .0
    }
}

impl From<[Probability; 3]> for Distribution {
    fn from(scores: [Probability; 3]) -> Self {
        Self(scores)
    }
}

/// Normalized shares of a tally. Empty tallies map to all-zero.
impl From<&Tally> for Distribution {
    fn from(tally: &Tally) -> Self {
        Self(Gesture::ALL.map(|g| tally.share(g)))
    }
}

impl Add for Distribution {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Mul<Probability> for Distribution {
    type Output = Self;
    fn mul(self, w: Probability) -> Self {
        Self(self.0.map(|p| p * w))
    }
}

impl std::iter::Sum for Distribution {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .iter()
            .map(|(g, p)| format!("{} {:.3}", g, p))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", s)
    }
}
