use rand::{SeedableRng, rngs::StdRng};

mod holes;
mod recur_backtrack;

pub use holes::punch_holes;
pub use recur_backtrack::recursive_backtrack;

use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves `maze` into a perfect maze: a spanning tree over all of its cells.
///
/// Any previous carving is discarded first. Cell weights are left untouched.
pub fn generate_maze(maze: &mut Maze, rng: &mut impl rand::Rng) {
    recursive_backtrack(maze, rng);
}
