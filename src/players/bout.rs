use super::*;
use crate::gesture::Outcome;
use crate::session::*;

/// Plays a [`Session`] against a scripted [`Opponent`]. The opponent's
/// gesture stays hidden from the session: only the judged outcome is
/// reported, exactly as a human would.
pub struct Bout<O> {
    session: Session,
    opponent: O,
}

impl<O> Bout<O>
where
    O: Opponent,
{
    pub fn new(session: Session, opponent: O) -> Self {
        Self { session, opponent }
    }
    /// Play one full round.
    pub fn round(&mut self) -> Result<Verdict, SessionError> {
        let opening = self.session.start_round()?;
        let thrown = self.opponent.throw(self.session.state().history());
        self.session
            .report_outcome(Outcome::judge(thrown, opening.agent))
    }
    /// Play `rounds` rounds and tally the agent's results.
    pub fn play(&mut self, rounds: usize) -> Result<Standings, SessionError> {
        for _ in 0..rounds {
            self.round()?;
        }
        let standings = Standings::from(self.session.state().history());
        log::info!("bout over after {} rounds: {}", rounds, standings);
        Ok(standings)
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Agent's record over a set of rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Standings {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Standings {
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.draws
    }
    /// Fraction of rounds the agent won outright.
    pub fn win_rate(&self) -> crate::Probability {
        self.wins as crate::Probability / self.rounds().max(1) as crate::Probability
    }
}

impl From<&[Record]> for Standings {
    fn from(history: &[Record]) -> Self {
        history
            .iter()
            .map(|r| r.outcome().flip())
            .fold(Self::default(), |mut s, o| {
                match o {
                    Outcome::Win => s.wins += 1,
                    Outcome::Lose => s.losses += 1,
                    Outcome::Draw => s.draws += 1,
                }
                s
            })
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "W {} / L {} / D {} ({:.1}% won)",
            self.wins,
            self.losses,
            self.draws,
            self.win_rate() * 100.
        )
    }
}
