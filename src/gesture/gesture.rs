use crate::Arbitrary;

/// Hand gesture: scissors, rock, paper.
///
/// Declaration order is the catalog order. It fixes the index layout of every
/// per-gesture array in the crate and breaks ties when the ensemble picks its
/// forecast, so Scissors wins any exact tie.
///
/// The relation is a 3-cycle: each gesture beats exactly one other
/// and is beaten by exactly one other.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Scissors = 0,
    Rock = 1,
    Paper = 2,
}

impl Gesture {
    /// All three gestures in catalog order.
    pub const ALL: [Gesture; 3] = [Gesture::Scissors, Gesture::Rock, Gesture::Paper];

    /// The gesture this one defeats.
    pub const fn beats(self) -> Self {
        match self {
            Gesture::Scissors => Gesture::Paper,
            Gesture::Rock => Gesture::Scissors,
            Gesture::Paper => Gesture::Rock,
        }
    }
    /// The gesture that defeats this one. Also the counter-pick
    /// against an opponent forecast to play `self`.
    pub const fn beaten_by(self) -> Self {
        match self {
            Gesture::Scissors => Gesture::Rock,
            Gesture::Rock => Gesture::Paper,
            Gesture::Paper => Gesture::Scissors,
        }
    }
    pub const fn name(self) -> &'static str {
        match self {
            Gesture::Scissors => "Scissors",
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
        }
    }
}

/// usize isomorphism, used to index per-gesture arrays
impl From<Gesture> for usize {
    fn from(g: Gesture) -> usize {
        g as usize
    }
}
impl From<usize> for Gesture {
    fn from(n: usize) -> Gesture {
        match n {
            0 => Gesture::Scissors,
            1 => Gesture::Rock,
            2 => Gesture::Paper,
            _ => unreachable!("invalid gesture"),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Gesture {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "s" | "scissors" => Ok(Gesture::Scissors),
            "r" | "rock" => Ok(Gesture::Rock),
            "p" | "paper" => Ok(Gesture::Paper),
            _ => Err(format!("invalid gesture str: {}", s)),
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Arbitrary for Gesture {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        *Self::ALL
            .choose(&mut rand::rng())
            .unwrap_or(&Gesture::Scissors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_of_three() {
        assert_eq!(Gesture::Scissors.beats(), Gesture::Paper);
        assert_eq!(Gesture::Paper.beats(), Gesture::Rock);
        assert_eq!(Gesture::Rock.beats(), Gesture::Scissors);
    }

    #[test]
    fn beaten_by_inverts_beats() {
        for g in Gesture::ALL {
            assert_eq!(g.beats().beaten_by(), g);
            assert_eq!(g.beaten_by().beats(), g);
            assert_ne!(g.beats(), g);
            assert_ne!(g.beaten_by(), g.beats());
        }
    }

    #[test]
    fn bijective_usize() {
        let g = Gesture::random();
        assert!(g == Gesture::from(usize::from(g)));
    }

    #[test]
    fn parse_names_and_letters() {
        assert_eq!(Gesture::try_from("Rock"), Ok(Gesture::Rock));
        assert_eq!(Gesture::try_from(" p "), Ok(Gesture::Paper));
        assert_eq!(Gesture::try_from("SCISSORS"), Ok(Gesture::Scissors));
        assert!(Gesture::try_from("lizard").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Gesture::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
    }
}
