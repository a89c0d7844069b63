use crate::heuristic::heuristic_score;
use std::fmt;

/// A single step: the first character of a state is moved right, past the
/// next `pivot` characters. `"TRACE"` with pivot 2 becomes `"RATCE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rotation {
    pub pivot: usize,
}

impl Rotation {
    pub fn new(pivot: usize) -> Self {
        Self { pivot }
    }

    /// Every rotation applicable to a state of `len` characters, pivot ascending.
    pub fn all(len: usize) -> impl Iterator<Item = Rotation> {
        (1..len).map(Rotation::new)
    }

    /// Returns `None` when the pivot falls outside `1..len`.
    pub fn apply(&self, state: &str) -> Option<String> {
        let mut chars: Vec<char> = state.chars().collect();
        if self.pivot == 0 || self.pivot >= chars.len() {
            return None;
        }

        chars[..=self.pivot].rotate_left(1);
        Some(chars.into_iter().collect())
    }

    /// Finds the rotation that turns `from` into `to`, if there is one.
    pub fn between(from: &str, to: &str) -> Option<Rotation> {
        let len = from.chars().count();
        Rotation::all(len).find(|rotation| rotation.apply(from).as_deref() == Some(to))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotate 0..={}", self.pivot)
    }
}

/// A successor state paired with its heuristic estimate to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub state: String,
    pub score: usize,
}

/// Generates every state one rotation away from `state`, sorted by score.
///
/// The sort is stable, so equal scores keep pivot order. A candidate equal
/// to `goal` always scores 0.
pub fn expand(state: &str, goal: &str) -> Vec<Candidate> {
    let len = state.chars().count();

    let mut candidates: Vec<Candidate> = Rotation::all(len)
        .filter_map(|rotation| rotation.apply(state))
        .map(|new_state| {
            let score = if new_state == goal {
                0
            } else {
                heuristic_score(&new_state, goal)
            };
            Candidate {
                state: new_state,
                score,
            }
        })
        .collect();

    candidates.sort_by_key(|candidate| candidate.score);
    candidates
}
