use rand::Rng;

use crate::error::MazeError;
use crate::maze::{Coord, Direction, Maze};

/// Opens shortcuts in a carved maze by clearing every interior wall of `holes` random cells.
///
/// Only cells that still have a wall towards an in-bounds neighbor are picked. Punching stops
/// early once no such cell is left. Returns the number of cells that were opened up.
pub fn punch_holes(
    maze: &mut Maze,
    holes: usize,
    rng: &mut impl Rng,
) -> Result<usize, MazeError> {
    if holes > maze.len() {
        return Err(MazeError::InvalidHoleCount {
            holes,
            capacity: maze.len(),
        });
    }
    if !maze.is_generated() {
        return Err(MazeError::NotGenerated);
    }

    let mut candidates = maze
        .coords()
        .filter(|&c| maze.interior_wall_count(c) > 0)
        .collect::<Vec<Coord>>();

    let mut punched = 0;
    while punched < holes && !candidates.is_empty() {
        let cell = candidates.swap_remove(rng.random_range(0..candidates.len()));
        // A neighbor's hole may already have opened this cell up completely
        if maze.interior_wall_count(cell) == 0 {
            continue;
        }
        for direction in Direction::ALL {
            maze.remove_wall(cell, direction);
        }
        punched += 1;
    }

    tracing::debug!(
        "[holes] punched {} of {} requested holes, {} passages open",
        punched,
        holes,
        maze.passage_count()
    );
    Ok(punched)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::generators::generate_maze;
    use crate::maze::Walls;

    fn carved(width: u16, height: u16, seed: u64) -> (Maze, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut maze = Maze::new(width, height, &mut rng).unwrap();
        generate_maze(&mut maze, &mut rng);
        (maze, rng)
    }

    fn walls(maze: &Maze) -> Vec<Walls> {
        maze.coords().map(|c| maze[c].walls()).collect()
    }

    #[test]
    fn test_zero_holes_is_noop() {
        let (mut maze, mut rng) = carved(6, 6, 5);
        let before = walls(&maze);
        assert_eq!(punch_holes(&mut maze, 0, &mut rng), Ok(0));
        assert_eq!(walls(&maze), before);
    }

    #[test]
    fn test_hole_count_boundary() {
        let (mut maze, mut rng) = carved(4, 3, 5);
        assert_eq!(
            punch_holes(&mut maze.clone(), 13, &mut rng),
            Err(MazeError::InvalidHoleCount {
                holes: 13,
                capacity: 12
            })
        );
        assert!(punch_holes(&mut maze, 12, &mut rng).is_ok());
    }

    #[test]
    fn test_punching_every_cell_opens_the_whole_grid() {
        let (mut maze, mut rng) = carved(5, 4, 11);
        let holes = maze.len();
        let punched = punch_holes(&mut maze, holes, &mut rng).unwrap();
        assert!(punched > 0 && punched <= holes);
        assert!(maze.coords().all(|c| maze.interior_wall_count(c) == 0));
        // 5x4 grid: 4 * 4 horizontal + 5 * 3 vertical passages
        assert_eq!(maze.passage_count(), 31);
    }

    #[test]
    fn test_requires_generated_maze() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut maze = Maze::new(3, 3, &mut rng).unwrap();
        assert_eq!(
            punch_holes(&mut maze, 1, &mut rng),
            Err(MazeError::NotGenerated)
        );
    }

    proptest! {
        #[test]
        fn holes_only_remove_walls(
            width in 1u16..12,
            height in 1u16..12,
            seed in any::<u64>(),
            fraction in 0.0f64..=1.0
        ) {
            let (mut maze, mut rng) = carved(width, height, seed);
            let holes = (maze.len() as f64 * fraction) as usize;
            let before = walls(&maze);
            let passages = maze.passage_count();

            punch_holes(&mut maze, holes, &mut rng).unwrap();

            prop_assert!(maze.passage_count() >= passages);
            for (old, new) in before.iter().zip(walls(&maze)) {
                for direction in Direction::ALL {
                    prop_assert!(old.has(direction) || !new.has(direction));
                }
            }
            // Boundary walls survive
            for c in maze.coords() {
                for direction in Direction::ALL {
                    if maze.neighbor(c, direction).is_none() {
                        prop_assert!(maze[c].has_wall(direction));
                    }
                }
            }
        }
    }
}
