use rand::Rng;

use crate::maze::{Coord, Maze};

/// Randomized depth-first carving with an explicit stack.
pub fn recursive_backtrack(maze: &mut Maze, rng: &mut impl Rng) {
    // Initialize the maze with walls
    maze.fill_walls();

    // Initialize the starting point
    let start: Coord = (
        rng.random_range(0..maze.width()),
        rng.random_range(0..maze.height()),
    );
    maze.mark_visited(start);
    tracing::debug!(
        "[generator] carving {}x{} maze from {:?}",
        maze.width(),
        maze.height(),
        start
    );

    let total = maze.len();
    let mut visited = 1;
    // The stack holds the current carving path, top is the cell being extended
    let mut stack = vec![start];

    while visited < total {
        let Some(&cell) = stack.last() else {
            // Unreachable on a rectangular grid: every cell is connected to the start
            break;
        };

        let neighbors = maze
            .neighbors(cell)
            .filter(|&(_, c)| !maze[c].is_visited())
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let (direction, neighbor) = neighbors[rng.random_range(0..neighbors.len())];
        maze.remove_wall(cell, direction);
        maze.mark_visited(neighbor);
        visited += 1;
        stack.push(neighbor);
    }

    maze.set_generated(true);
    tracing::debug!(
        "[generator] carved {} passages over {} cells",
        maze.passage_count(),
        total
    );
}
