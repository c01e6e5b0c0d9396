use crate::maze::Coord;

/// Everything that can go wrong while building, carving or solving a maze.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Width or height is zero.
    #[error("invalid maze dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimension { width: u16, height: u16 },

    /// More holes were requested than the maze has cells.
    #[error("cannot punch {holes} holes into a maze of {capacity} cells")]
    InvalidHoleCount { holes: usize, capacity: usize },

    /// A solver ran out of cells to backtrack to before reaching the goal.
    #[error("{solver} exhausted all reachable cells after {traversed} steps without reaching {goal:?}")]
    Unreachable {
        solver: &'static str,
        goal: Coord,
        traversed: usize,
    },

    /// Holes were requested before the maze was carved.
    #[error("holes can only be punched into a maze that has already been generated")]
    NotGenerated,
}
