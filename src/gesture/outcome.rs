use super::*;

/// Result of a round, always from the opponent's perspective:
/// `Win` means the opponent beat the agent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Lose, Outcome::Draw];

    /// Reconstruct the opponent's hidden gesture from the agent's
    /// committed gesture and the reported outcome.
    pub const fn infer(self, agent: Gesture) -> Gesture {
        match self {
            Outcome::Win => agent.beaten_by(),
            Outcome::Lose => agent.beats(),
            Outcome::Draw => agent,
        }
    }
    /// Evaluate a pair of gestures from the opponent's side.
    /// Inverse of [`Outcome::infer`].
    pub fn judge(opponent: Gesture, agent: Gesture) -> Self {
        if opponent.beats() == agent {
            Outcome::Win
        } else if agent.beats() == opponent {
            Outcome::Lose
        } else {
            Outcome::Draw
        }
    }
    /// The same round seen from the agent's side.
    pub const fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
    /// Sentence addressed to the opponent describing the round.
    pub fn describe(self, agent: Gesture, opponent: Gesture) -> String {
        match self {
            Outcome::Win => format!("You won! You chose {} and defeated my {}", opponent, agent),
            Outcome::Lose => format!("You lost! I chose {} and defeated your {}", agent, opponent),
            Outcome::Draw => format!("It's a draw! We both chose {}", agent),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Outcome {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "w" | "win" => Ok(Outcome::Win),
            "l" | "lose" => Ok(Outcome::Lose),
            "d" | "draw" => Ok(Outcome::Draw),
            _ => Err(format!("invalid outcome str: {}", s)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Lose => write!(f, "Lose"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_each_outcome() {
        assert_eq!(Outcome::Win.infer(Gesture::Rock), Gesture::Paper);
        assert_eq!(Outcome::Lose.infer(Gesture::Rock), Gesture::Scissors);
        assert_eq!(Outcome::Draw.infer(Gesture::Rock), Gesture::Rock);
    }

    #[test]
    fn judge_reconstructs_reported_outcome() {
        for agent in Gesture::ALL {
            for outcome in Outcome::ALL {
                let opponent = outcome.infer(agent);
                assert_eq!(Outcome::judge(opponent, agent), outcome);
            }
        }
    }

    #[test]
    fn flip_is_involution() {
        for outcome in Outcome::ALL {
            assert_eq!(outcome.flip().flip(), outcome);
        }
        assert_eq!(
            Outcome::judge(Gesture::Paper, Gesture::Rock).flip(),
            Outcome::judge(Gesture::Rock, Gesture::Paper)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Outcome::try_from("WIN"), Ok(Outcome::Win));
        assert_eq!(Outcome::try_from("l"), Ok(Outcome::Lose));
        assert!(Outcome::try_from("tie").is_err());
        assert!(Outcome::try_from("").is_err());
    }

    #[test]
    fn describe_names_both_gestures() {
        let s = Outcome::Win.describe(Gesture::Rock, Gesture::Paper);
        assert_eq!(s, "You won! You chose Paper and defeated my Rock");
        let s = Outcome::Lose.describe(Gesture::Rock, Gesture::Scissors);
        assert_eq!(s, "You lost! I chose Rock and defeated your Scissors");
        let s = Outcome::Draw.describe(Gesture::Rock, Gesture::Rock);
        assert_eq!(s, "It's a draw! We both chose Rock");
    }
}
