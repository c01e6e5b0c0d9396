use std::collections::HashSet;

mod best_first;
mod greedy;
mod trace;

pub use best_first::{solve_best_first, straight_line_weight};
pub use greedy::{DEAD_BRANCH, lookahead_score, solve_greedy};
pub use trace::{Trace, TraceStep};

use crate::error::MazeError;
use crate::maze::{Coord, Direction, Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    /// Scores each move by a bounded simulated walk of locally cheapest steps.
    GreedyLookahead { lookahead: usize },
    /// Scores each move by the weight of a straight, wall-ignoring route to the goal.
    WeightedBestFirst,
}

impl Solver {
    pub const DEFAULT_LOOKAHEAD: usize = 3;

    pub fn name(&self) -> &'static str {
        match self {
            Solver::GreedyLookahead { .. } => "greedy lookahead",
            Solver::WeightedBestFirst => "weighted best-first",
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Solver::GreedyLookahead {
            lookahead: Solver::DEFAULT_LOOKAHEAD,
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::GreedyLookahead { lookahead } => {
                write!(f, "Greedy Search ({lookahead}-step lookahead)")
            }
            Solver::WeightedBestFirst => write!(f, "Weighted Best-First Search (A*-like)"),
        }
    }
}

/// Walks from the maze's start to its end with the given strategy.
///
/// The maze is only read, so several solvers may run on it at the same time.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Result<Trace, MazeError> {
    let trace = match solver {
        Solver::GreedyLookahead { lookahead } => solve_greedy(maze, lookahead),
        Solver::WeightedBestFirst => solve_best_first(maze),
    }?;
    tracing::info!(
        "[solver] {} reached {:?}: {} cells, total weight {}, {} backtracks",
        solver,
        maze.end(),
        trace.total_cells(),
        trace.total_weight(),
        trace.backtracks()
    );
    Ok(trace)
}

/// Depth-first walk shared by both strategies.
///
/// Every iteration records the top of the path, then asks `choose` to pick one of the open,
/// not yet visited neighbors (given in north, south, east, west order). Picking nothing, or
/// having nothing to pick from, pops the path. Each cell is entered at most once and each pop
/// shrinks the path, so the walk ends after at most `2 * maze.len()` iterations.
fn walk<F>(maze: &Maze, solver: &'static str, mut choose: F) -> Result<Trace, MazeError>
where
    F: FnMut(Coord, &[(Direction, Coord)]) -> Option<Coord>,
{
    let mut trace = Trace::default();
    let mut path = vec![maze.start()];
    // Cells on the path are always visited, so this also covers path membership
    let mut visited = HashSet::new();

    while let Some(&current) = path.last() {
        visited.insert(current);
        trace.record(current, maze.weight(current));
        if current == maze.end() {
            return Ok(trace);
        }

        let candidates = maze
            .open_neighbors(current)
            .filter(|(_, c)| !visited.contains(c))
            .collect::<Vec<_>>();

        match choose(current, &candidates) {
            Some(next) => path.push(next),
            None => {
                tracing::trace!("[solver] {} backtracking from {:?}", solver, current);
                path.pop();
                trace.record_backtrack();
            }
        }
    }

    Err(MazeError::Unreachable {
        solver,
        goal: maze.end(),
        traversed: trace.total_cells(),
    })
}
