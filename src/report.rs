use crate::error::{SolveError, SolveResult};
use crate::rotation::Rotation;
use crate::solver::Solution;
use crossterm::style::Stylize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Highlight the block each rotation moved.
    pub styled: bool,
    /// Leave out the intermediate states.
    pub quiet: bool,
}

/// A solve result paired with how it should be printed.
pub struct Report<'a> {
    result: &'a SolveResult<Solution>,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a SolveResult<Solution>, options: ReportOptions) -> Self {
        Self { result, options }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = match self.result {
            Ok(solution) => solution,
            Err(SolveError::Infeasible { .. }) => {
                return writeln!(
                    f,
                    "This is clearly impossible. I am not even trying to solve this."
                );
            }
            Err(SolveError::NoSolution { .. }) => {
                return writeln!(
                    f,
                    "No solution found. This is weird, I should have caught this before even trying A*."
                );
            }
        };

        writeln!(f, "{} steps from start to goal:", solution.steps())?;

        if !self.options.quiet {
            let mut previous: Option<&str> = None;
            for state in &solution.path {
                let rotation = previous.and_then(|prev| Rotation::between(prev, state));
                match rotation {
                    Some(rotation) if self.options.styled => {
                        writeln!(f, "{}", highlight(state, rotation))?
                    }
                    _ => writeln!(f, "{}", state)?,
                }
                previous = Some(state.as_str());
            }
        }

        writeln!(
            f,
            "{} A* iterations were performed to find this solution.",
            solution.iterations
        )
    }
}

pub fn render(result: &SolveResult<Solution>, options: ReportOptions) -> String {
    Report::new(result, options).to_string()
}

fn highlight(state: &str, rotation: Rotation) -> String {
    let split = state
        .char_indices()
        .nth(rotation.pivot + 1)
        .map_or(state.len(), |(offset, _)| offset);
    let (moved, rest) = state.split_at(split);
    format!("{}{}", moved.yellow().bold(), rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn plain_report_lists_every_state() {
        let report = render(&solve("AB", "BA"), ReportOptions::default());
        assert_eq!(
            report,
            "1 steps from start to goal:\nAB\nBA\n1 A* iterations were performed to find this solution.\n"
        );
    }

    #[test]
    fn quiet_report_has_summary_only() {
        let options = ReportOptions {
            styled: false,
            quiet: true,
        };
        let report = render(&solve("A", "A"), options);
        assert_eq!(
            report,
            "0 steps from start to goal:\n0 A* iterations were performed to find this solution.\n"
        );
    }

    #[test]
    fn infeasible_report() {
        let report = render(&solve("AB", "ABC"), ReportOptions::default());
        assert!(report.starts_with("This is clearly impossible."));
    }

    #[test]
    fn exhausted_report() {
        let report = render(
            &Err(SolveError::NoSolution { iterations: 4 }),
            ReportOptions::default(),
        );
        assert!(report.starts_with("No solution found."));
    }

    #[test]
    fn highlight_wraps_the_moved_block() {
        let styled = highlight("RATCE", Rotation::new(2));
        assert_ne!(styled, "RATCE");
        assert!(styled.starts_with('\u{1b}'));
        assert!(styled.contains("RAT\u{1b}["));
        assert!(styled.ends_with("CE"));
    }
}
