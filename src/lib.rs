//! Weighted perfect mazes and two greedy strategies racing across them.
//!
//! A [`Maze`] is carved into a spanning tree by [`generate_maze`], optionally loosened with
//! [`punch_holes`], and then walked from start to goal by the solvers in [`solvers`]. Each run
//! yields a [`Trace`] with the cells visited and the weight accumulated on the way.

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod race;
pub mod solvers;

pub use config::RaceConfig;
pub use error::MazeError;
pub use generators::{generate_maze, get_rng, punch_holes};
pub use maze::{Cell, Coord, Direction, Maze};
pub use race::Race;
pub use solvers::{Solver, Trace, TraceStep, solve_maze};
