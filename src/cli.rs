use crate::report::ReportOptions;
use crate::solver::scramble;
use clap::Parser;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};

/// Pairs solved when no words are given.
pub const DEMO_PAIRS: [(&str, &str); 6] = [
    ("ALLERGY", "LARGELY"),
    ("TRACE", "CRATE"),
    ("DENTIST", "DENTITS"),
    ("ROMA", "AMOR"),
    ("NEPAL", "PANEL"),
    ("FRESA", "FRASE"),
];

/// Demo pairs that can search for a very long time; only run with --slow.
pub const SLOW_DEMO_PAIRS: [(&str, &str); 2] = [
    ("THECLASSROOM", "SCHOOLMASTER"),
    ("TEARDROP", "PREDATOR"),
];

#[derive(Parser, Debug)]
#[command(name = "anagram-solver")]
#[command(
    version,
    about = "Find the fewest rotations turning one word into an anagram of it"
)]
pub struct Cli {
    /// Start word, or the goal word when --scramble is given
    #[arg(value_name = "START")]
    pub start: Option<String>,

    /// Goal word
    #[arg(value_name = "GOAL")]
    pub goal: Option<String>,

    /// Build the start by applying this many random rotations to the goal
    #[arg(short, long, value_name = "ROTATIONS")]
    pub scramble: Option<usize>,

    /// Seed for --scramble
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable highlighting of the moved block
    #[arg(long)]
    pub plain: bool,

    /// Print only the step and iteration counts
    #[arg(short, long)]
    pub quiet: bool,

    /// Add the long-running pairs to the demo
    #[arg(long)]
    pub slow: bool,
}

impl Cli {
    /// The (start, goal) pairs to solve, or `None` if a start word was
    /// given without a goal and without --scramble.
    pub fn pairs(&self) -> Option<Vec<(String, String)>> {
        match (self.scramble, &self.start, &self.goal) {
            (Some(rotations), start, goal) => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };

                let goals: Vec<String> = match goal.as_ref().or(start.as_ref()) {
                    Some(word) => vec![word.clone()],
                    None => self
                        .demo_pairs()
                        .map(|(_, goal)| goal.to_string())
                        .collect(),
                };

                Some(
                    goals
                        .into_iter()
                        .map(|goal| (scramble(&goal, rotations, &mut rng), goal))
                        .collect(),
                )
            }
            (None, Some(start), Some(goal)) => Some(vec![(start.clone(), goal.clone())]),
            (None, Some(_), None) => None,
            (None, None, _) => Some(
                self.demo_pairs()
                    .map(|(start, goal)| (start.to_string(), goal.to_string()))
                    .collect(),
            ),
        }
    }

    fn demo_pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let demo: &'static [(&str, &str)] = &DEMO_PAIRS;
        let slow: &'static [(&str, &str)] = if self.slow { &SLOW_DEMO_PAIRS } else { &[] };
        demo.iter().chain(slow).copied()
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            styled: !self.plain && std::io::stdout().is_tty(),
            quiet: self.quiet,
        }
    }
}
