use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("'{start}' cannot be rearranged into '{goal}'")]
    Infeasible { start: String, goal: String },
    #[error("search exhausted after {iterations} iterations without reaching the goal")]
    NoSolution { iterations: usize },
}

pub type SolveResult<T> = Result<T, SolveError>;
