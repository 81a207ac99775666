//! Roshambo Binary
//!
//! Interactive play against the predictive agent, or simulated bouts
//! against scripted robots.

use clap::Parser;
use colored::Colorize;
use roshambo::Probability;
use roshambo::players::*;
use roshambo::predict::Weights;
use roshambo::session::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Play interactively, reporting each outcome by hand")]
    Play {
        #[command(flatten)]
        weights: Ensemble,
    },
    #[command(about = "Pit the agent against a scripted robot", alias = "sim")]
    Simulate {
        #[arg(long, default_value_t = 100)]
        rounds: usize,
        #[arg(long, default_value = "cycle", help = "constant:<gesture> | cycle | copycat | random")]
        opponent: String,
        #[arg(long, help = "seed for the random robot")]
        seed: Option<u64>,
        #[arg(long, help = "print the full round history as JSON")]
        json: bool,
        #[command(flatten)]
        weights: Ensemble,
    },
}

#[derive(clap::Args)]
struct Ensemble {
    #[arg(long, default_value_t = roshambo::WEIGHT_RECENCY)]
    recency: Probability,
    #[arg(long, default_value_t = roshambo::WEIGHT_RESPONSE)]
    response: Probability,
    #[arg(long, default_value_t = roshambo::WEIGHT_FREQUENCY)]
    frequency: Probability,
}

impl From<Ensemble> for Weights {
    fn from(e: Ensemble) -> Self {
        Weights::new(e.recency, e.response, e.frequency)
    }
}

fn main() -> anyhow::Result<()> {
    roshambo::log()?;
    match Command::parse() {
        Command::Play { weights } => play(Session::new(weights.into())),
        Command::Simulate {
            rounds,
            opponent,
            seed,
            json,
            weights,
        } => {
            let robot = match (Robot::try_from(opponent.as_str()), seed) {
                (Ok(Robot::Random(_)), Some(seed)) => Robot::random(seed),
                (robot, _) => robot.map_err(anyhow::Error::msg)?,
            };
            simulate(Session::new(weights.into()), robot, rounds, json)
        }
    }
}

fn play(mut session: Session) -> anyhow::Result<()> {
    let human = Human;
    log::info!("playing with weights {}", session.weights());
    println!("{}", "Welcome to the AI Rock Paper Scissors Game!".bold());
    println!("Think of a gesture in your mind, then start a new round.");
    loop {
        match human.choose()? {
            Choice::Quit => break,
            Choice::Reset => {
                session.reset();
                println!("{}", "Game reset. I have forgotten everything.".yellow());
            }
            Choice::Next => {
                let opening = session.start_round()?;
                println!("{}", opening.to_string().cyan());
                let outcome = human.report(&opening)?;
                let verdict = session.report_outcome(outcome)?;
                println!("{}", verdict.to_string().bold());
                println!("{}", session.analysis());
                println!(
                    "Round {} ended! Start a new round to begin Round {}.",
                    verdict.round,
                    session.state().round()
                );
            }
        }
    }
    Ok(())
}

fn simulate(session: Session, robot: Robot, rounds: usize, json: bool) -> anyhow::Result<()> {
    log::info!("simulating {} rounds against {}", rounds, robot);
    let mut bout = Bout::new(session, robot);
    let standings = bout.play(rounds)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(bout.session().state().history())?
        );
        return Ok(());
    }
    println!("{}", bout.session().analysis());
    println!(
        "{} {} {}",
        format!("agent won {}", standings.wins).green(),
        format!("lost {}", standings.losses).red(),
        format!("drew {}", standings.draws).yellow(),
    );
    println!("{}", standings.to_string().bold());
    Ok(())
}
