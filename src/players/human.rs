use crate::gesture::Outcome;
use crate::session::Opening;
use dialoguer::Select;
use std::fmt::Debug;
use std::fmt::Formatter;

/// The person at the terminal. Thinks of a gesture, sees the agent's,
/// and reports how the round went for them.
pub struct Human;

/// What to do between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Next,
    Reset,
    Quit,
}

impl Human {
    pub fn report(&self, opening: &Opening) -> anyhow::Result<Outcome> {
        let selection = Select::new()
            .with_prompt(format!(
                "\nI CHOSE {}. Did you win, lose, or draw?",
                opening.agent.name().to_uppercase()
            ))
            .report(false)
            .items(&Outcome::ALL)
            .default(0)
            .interact()?;
        Ok(Outcome::ALL[selection])
    }
    pub fn choose(&self) -> anyhow::Result<Choice> {
        let choices = [
            Choice::Next, //
            Choice::Reset,
            Choice::Quit,
        ];
        let selection = Select::new()
            .with_prompt("\nThink of a gesture, then")
            .report(false)
            .items(&["Start new round", "Reset game", "Quit"])
            .default(0)
            .interact()?;
        Ok(choices[selection])
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}
