/// Penalty of the character at `index` in `start`, measured against its
/// first occurrence in `goal`. `None` if `goal` does not contain it.
///
/// A character sitting right of its goal slot costs the distance back to
/// it; one sitting left of it costs `index + 1`, the rotations needed to
/// bring it round to the front first.
pub fn positional_penalty(start: &[char], goal: &[char], index: usize) -> Option<usize> {
    let target = start.get(index)?;

    // First and last occurrence are both candidates, the smaller wins.
    let first = goal.iter().position(|c| c == target)?;
    let last = goal.iter().rposition(|c| c == target)?;
    let goal_index = first.min(last);

    let penalty = match index.cmp(&goal_index) {
        std::cmp::Ordering::Greater => index - goal_index,
        std::cmp::Ordering::Less => index + 1,
        std::cmp::Ordering::Equal => 0,
    };
    Some(penalty)
}

/// Estimates the rotations left to turn `start` into `goal`.
///
/// Note the running score is replaced, not summed, at every position, so
/// the estimate is the penalty of the last position alone.
pub fn heuristic_score(start: &str, goal: &str) -> usize {
    if start == goal {
        return 0;
    }

    let start: Vec<char> = start.chars().collect();
    let goal: Vec<char> = goal.chars().collect();

    let mut score = 0;
    for index in 0..start.len() {
        if let Some(penalty) = positional_penalty(&start, &goal, index) {
            score = penalty;
        }
    }
    score
}
