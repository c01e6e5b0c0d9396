use super::{Solver, Trace, walk};
use crate::error::MazeError;
use crate::maze::{Coord, Maze};

/// Best-first search guided by [`straight_line_weight`].
///
/// This is not A*: the heuristic ignores walls and nothing is ever reopened, so the walk is
/// neither optimal nor admissible. The first strictly cheaper candidate in north, south, east,
/// west order wins.
pub fn solve_best_first(maze: &Maze) -> Result<Trace, MazeError> {
    walk(maze, Solver::WeightedBestFirst.name(), |_, candidates| {
        candidates
            .iter()
            .min_by_key(|&&(_, c)| straight_line_weight(maze, c))
            .map(|&(_, c)| c)
    })
}

/// Weight of walking from `from` to the maze's end along a straight L-shaped route: the whole
/// horizontal gap first, then the vertical one.
///
/// Walls are not consulted. The weight of `from` itself is not counted, every cell entered is.
pub fn straight_line_weight(maze: &Maze, from: Coord) -> u64 {
    let (end_x, end_y) = maze.end();
    let (mut x, mut y) = from;
    let mut total = 0;

    while x != end_x {
        x = if x < end_x { x + 1 } else { x - 1 };
        total += u64::from(maze.weight((x, y)));
    }
    while y != end_y {
        y = if y < end_y { y + 1 } else { y - 1 };
        total += u64::from(maze.weight((x, y)));
    }
    total
}
