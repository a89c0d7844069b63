use crate::heuristic::heuristic_score;
use crate::rotation::Candidate;
use log::{debug, trace};
use std::collections::HashMap;

/// A discovered state, addressed by its index in the node arena.
#[derive(Debug, Clone)]
struct SearchNode {
    state: String,
    /// `None` only for the start state.
    parent: Option<usize>,
    g_score: usize,
    f_score: usize,
    closed: bool,
}

/// Result of one search. An empty path means the goal was never reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Vec<String>,
    pub iterations: usize,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Best-first search from `start` to `goal`, every step costing 1.
///
/// `expand` yields the successors of a state with their heuristic scores.
/// OPEN is a plain list re-sorted (stably) by current f-score after each
/// expansion, so it may hold the same state more than once. A closed state
/// is never reopened, and a state's parent is fixed the first time it is
/// seen even if a cheaper route turns up later.
pub fn a_star<F>(start: &str, goal: &str, mut expand: F) -> SearchOutcome
where
    F: FnMut(&str, &str) -> Vec<Candidate>,
{
    let mut nodes = vec![SearchNode {
        state: start.to_string(),
        parent: None,
        g_score: 0,
        f_score: heuristic_score(start, goal),
        closed: false,
    }];
    let mut ids: HashMap<String, usize> = HashMap::from([(start.to_string(), 0)]);

    let mut open: Vec<usize> = vec![0];
    let mut iterations = 0;

    while !open.is_empty() {
        let current = open.remove(0);

        // Stale duplicate of a state that was already expanded. It still
        // counts as an iteration; expanding it again could change nothing.
        if nodes[current].closed {
            iterations += 1;
            continue;
        }
        nodes[current].closed = true;

        if nodes[current].state == goal {
            let path = reconstruct_path(&nodes, current);
            debug!(
                "reached goal after {} iterations, path of {} states",
                iterations,
                path.len()
            );
            return SearchOutcome { path, iterations };
        }

        iterations += 1;

        let g_score = nodes[current].g_score + 1;
        trace!(
            "expanding {} (g = {}, open = {})",
            nodes[current].state,
            g_score - 1,
            open.len()
        );

        for Candidate { state, score } in expand(&nodes[current].state, goal) {
            let f_score = g_score + score;

            let id = match ids.get(&state) {
                Some(&id) => {
                    let node = &mut nodes[id];
                    if node.closed || f_score >= node.f_score {
                        continue;
                    }
                    node.g_score = g_score;
                    node.f_score = f_score;
                    id
                }
                None => {
                    let id = nodes.len();
                    ids.insert(state.clone(), id);
                    nodes.push(SearchNode {
                        state,
                        parent: Some(current),
                        g_score,
                        f_score,
                        closed: false,
                    });
                    id
                }
            };

            open.push(id);
        }

        open.sort_by_key(|&id| nodes[id].f_score);
    }

    debug!("open list exhausted after {} iterations", iterations);
    SearchOutcome {
        path: Vec::new(),
        iterations,
    }
}

fn reconstruct_path(nodes: &[SearchNode], goal: usize) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(id) = current {
        path.push(nodes[id].state.clone());
        current = nodes[id].parent;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::expand;

    fn candidates(edges: &[(&str, usize)]) -> Vec<Candidate> {
        edges
            .iter()
            .map(|&(state, score)| Candidate {
                state: state.to_string(),
                score,
            })
            .collect()
    }

    #[test]
    fn start_equal_to_goal_needs_no_iterations() {
        let outcome = a_star("AB", "AB", expand);
        assert_eq!(outcome.path, vec!["AB"]);
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn two_letters_swap_in_one_step() {
        let outcome = a_star("AB", "BA", expand);
        assert_eq!(outcome.path, vec!["AB", "BA"]);
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn unreachable_goal_exhausts_open() {
        let outcome = a_star("S", "G", |state: &str, _: &str| match state {
            "S" => candidates(&[("A", 1), ("B", 1)]),
            "A" => candidates(&[("S", 0), ("B", 0)]),
            _ => Vec::new(),
        });

        assert!(!outcome.is_found());
        assert_eq!(outcome.iterations, 3);
    }

    #[test]
    fn duplicate_open_entry_is_expanded_once() {
        let mut expanded = Vec::new();

        let outcome = a_star("S", "G", |state: &str, _: &str| {
            expanded.push(state.to_string());
            match state {
                "S" => candidates(&[("A", 5), ("B", 0)]),
                "B" => candidates(&[("A", 0)]),
                "A" => candidates(&[("G", 0)]),
                _ => Vec::new(),
            }
        });

        // A is queued twice; its parent stays S even after B offers a cheaper f.
        assert_eq!(outcome.path, vec!["S", "A", "G"]);
        assert_eq!(expanded, vec!["S", "B", "A"]);
        // The stale copy of A popped before G is counted too.
        assert_eq!(outcome.iterations, 4);
    }

    #[test]
    fn worse_f_score_is_not_requeued() {
        let mut expanded = Vec::new();

        let outcome = a_star("S", "G", |state: &str, _: &str| {
            expanded.push(state.to_string());
            match state {
                "S" => candidates(&[("A", 0), ("B", 3)]),
                "A" => candidates(&[("B", 9), ("G", 5)]),
                "B" => candidates(&[("G", 0)]),
                _ => Vec::new(),
            }
        });

        // B keeps f = 4 from S (11 via A). G is first seen from A, so A stays
        // its parent after B lowers its f-score.
        assert_eq!(outcome.path, vec!["S", "A", "G"]);
        assert_eq!(outcome.iterations, 3);
        assert_eq!(expanded, vec!["S", "A", "B"]);
    }
}
