//! Finds the shortest sequence of rotations that turns a word into one of
//! its anagrams, using A* over the rotation graph.

pub mod cli;
pub mod error;
pub mod heuristic;
pub mod report;
pub mod rotation;
pub mod search;
pub mod solver;

pub use error::{SolveError, SolveResult};
pub use heuristic::heuristic_score;
pub use rotation::{expand, Candidate, Rotation};
pub use search::{a_star, SearchOutcome};
pub use solver::{is_feasible, scramble, solve, Solution};
