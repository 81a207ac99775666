use super::*;
use crate::gesture::Gesture;
use crate::session::Record;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Scripted opponents.
#[derive(Debug, Clone)]
pub enum Robot {
    /// Always the same gesture.
    Constant(Gesture),
    /// Scissors, Rock, Paper, Scissors, ...
    Cycle,
    /// Repeats the agent's previous gesture. Opens with Rock.
    Copycat,
    /// Uniform over the catalog.
    Random(SmallRng),
}

impl Robot {
    pub fn random(seed: u64) -> Self {
        Robot::Random(SmallRng::seed_from_u64(seed))
    }
}

impl Opponent for Robot {
    fn throw(&mut self, history: &[Record]) -> Gesture {
        match self {
            Robot::Constant(g) => *g,
            Robot::Cycle => Gesture::from(history.len() % Gesture::ALL.len()),
            Robot::Copycat => history
                .last()
                .map(Record::agent)
                .unwrap_or(Gesture::Rock),
            Robot::Random(rng) => {
                use rand::Rng;
                Gesture::from(rng.random_range(0..Gesture::ALL.len()))
            }
        }
    }
}

/// str isomorphism: `constant:<gesture>`, `cycle`, `copycat`, `random`.
/// Random robots parsed from text are seeded with zero.
impl TryFrom<&str> for Robot {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        match s.split_once(':') {
            Some(("constant", g)) => Gesture::try_from(g).map(Robot::Constant),
            Some(_) => Err(format!("invalid robot str: {}", s)),
            None => match s.as_str() {
                "cycle" => Ok(Robot::Cycle),
                "copycat" => Ok(Robot::Copycat),
                "random" => Ok(Robot::random(0)),
                _ => Err(format!("invalid robot str: {}", s)),
            },
        }
    }
}

impl std::fmt::Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Robot::Constant(g) => write!(f, "constant {}", g),
            Robot::Cycle => write!(f, "cycle"),
            Robot::Copycat => write!(f, "copycat"),
            Robot::Random(_) => write!(f, "random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Outcome;

    #[test]
    fn parse_robots() {
        assert!(matches!(Robot::try_from("constant:paper"), Ok(Robot::Constant(Gesture::Paper))));
        assert!(matches!(Robot::try_from("Cycle"), Ok(Robot::Cycle)));
        assert!(matches!(Robot::try_from("copycat"), Ok(Robot::Copycat)));
        assert!(matches!(Robot::try_from("random"), Ok(Robot::Random(_))));
        assert!(Robot::try_from("constant:lizard").is_err());
        assert!(Robot::try_from("spock").is_err());
    }

    #[test]
    fn cycle_walks_the_catalog() {
        let mut robot = Robot::Cycle;
        let mut history = Vec::new();
        let mut thrown = Vec::new();
        for round in 1..=4 {
            let g = robot.throw(&history);
            thrown.push(g);
            history.push(Record::new(round, Gesture::Rock, Outcome::judge(g, Gesture::Rock), 0));
        }
        assert_eq!(
            thrown,
            vec![Gesture::Scissors, Gesture::Rock, Gesture::Paper, Gesture::Scissors]
        );
    }

    #[test]
    fn copycat_repeats_agent() {
        let mut robot = Robot::Copycat;
        assert_eq!(robot.throw(&[]), Gesture::Rock);
        let history = [Record::new(1, Gesture::Paper, Outcome::Draw, 0)];
        assert_eq!(robot.throw(&history), Gesture::Paper);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = Robot::random(7);
        let mut b = Robot::random(7);
        for _ in 0..32 {
            assert_eq!(a.throw(&[]), b.throw(&[]));
        }
    }
}
