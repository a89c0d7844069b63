use crate::error::{SolveError, SolveResult};
use crate::rotation::{expand, Rotation};
use crate::search::a_star;
use log::{error, info};
use rand::Rng;

/// A path of states from start to goal, each one rotation apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<String>,
    pub iterations: usize,
}

impl Solution {
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The rotation taken between each pair of consecutive states.
    pub fn rotations(&self) -> impl Iterator<Item = Option<Rotation>> + '_ {
        self.path
            .windows(2)
            .map(|pair| Rotation::between(&pair[0], &pair[1]))
    }
}

/// True when `goal` is an anagram of `start`, i.e. some sequence of
/// rotations can reach it.
pub fn is_feasible(start: &str, goal: &str) -> bool {
    let mut start: Vec<char> = start.chars().collect();
    let mut goal: Vec<char> = goal.chars().collect();

    if start.len() != goal.len() {
        return false;
    }

    start.sort_unstable();
    goal.sort_unstable();
    start == goal
}

pub fn solve(start: &str, goal: &str) -> SolveResult<Solution> {
    if !is_feasible(start, goal) {
        info!("rejecting '{}' -> '{}': not anagrams", start, goal);
        return Err(SolveError::Infeasible {
            start: start.to_string(),
            goal: goal.to_string(),
        });
    }

    let outcome = a_star(start, goal, expand);

    if !outcome.is_found() {
        // Rotations preserve the characters, so a feasible pair always has a path.
        error!(
            "no path from '{}' to '{}' after {} iterations",
            start, goal, outcome.iterations
        );
        return Err(SolveError::NoSolution {
            iterations: outcome.iterations,
        });
    }

    Ok(Solution {
        path: outcome.path,
        iterations: outcome.iterations,
    })
}

/// Applies `rotations` random rotations to `goal`.
pub fn scramble<R: Rng + ?Sized>(goal: &str, rotations: usize, rng: &mut R) -> String {
    let len = goal.chars().count();
    let mut state = goal.to_string();

    if len < 2 {
        return state;
    }

    for _ in 0..rotations {
        let rotation = Rotation::new(rng.gen_range(1..len));
        if let Some(next) = rotation.apply(&state) {
            state = next;
        }
    }
    state
}
