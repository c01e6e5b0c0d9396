use std::collections::HashSet;

use super::{Solver, Trace, walk};
use crate::error::MazeError;
use crate::maze::{Coord, Maze};

/// Score of a candidate whose simulated walk runs into a dead end.
pub const DEAD_BRANCH: u64 = u64::MAX;

/// Greedy search that commits to the move whose short simulated continuation is cheapest.
pub fn solve_greedy(maze: &Maze, lookahead: usize) -> Result<Trace, MazeError> {
    let name = Solver::GreedyLookahead { lookahead }.name();
    walk(maze, name, |current, candidates| {
        // min_by_key keeps the first minimum, so ties go to the earlier direction
        candidates
            .iter()
            .min_by_key(|&&(_, c)| lookahead_score(maze, current, c, lookahead))
            .map(|&(_, c)| c)
    })
}

/// Weight of entering `candidate` from `from` and then taking `lookahead` further steps, each
/// into the cheapest open neighbor not yet on the simulated walk.
///
/// Returns [`DEAD_BRANCH`] if the simulated walk gets stuck before all steps are taken. A walk
/// that reaches the goal stops there with the weight gathered so far.
pub fn lookahead_score(maze: &Maze, from: Coord, candidate: Coord, lookahead: usize) -> u64 {
    let mut simulated = HashSet::from([from, candidate]);
    let mut position = candidate;
    let mut score = u64::from(maze.weight(candidate));

    for _ in 0..lookahead {
        if position == maze.end() {
            break;
        }
        let Some((_, next)) = maze
            .open_neighbors(position)
            .filter(|(_, n)| !simulated.contains(n))
            .min_by_key(|&(_, n)| maze.weight(n))
        else {
            return DEAD_BRANCH;
        };
        simulated.insert(next);
        score += u64::from(maze.weight(next));
        position = next;
    }
    score
}
