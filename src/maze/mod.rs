pub mod cell;
mod grid;

use rand::Rng;

pub use cell::{Cell, Direction, Walls};
use grid::Grid;

use crate::error::MazeError;

/// A cell position as `(x, y)`, with `y = 0` being the northern row.
pub type Coord = (u16, u16);

/// A rectangular weighted maze with a fixed start and goal.
///
/// Walls are only ever removed through [`Maze::remove_wall`], which keeps both sides of a wall in
/// sync, so the wall state of two adjacent cells always agrees.
#[derive(Clone)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    end: Coord,
    generated: bool,
}

impl Maze {
    /// Creates a fully walled maze with uniformly random cell weights.
    ///
    /// The start is the middle of the northern row and the goal the middle of the southern row.
    /// On a single-row maze the two coincide.
    pub fn new(width: u16, height: u16, rng: &mut impl Rng) -> Result<Self, MazeError> {
        Maze::from_cells(width, height, || Cell::random(&mut *rng))
    }

    fn from_cells(
        width: u16,
        height: u16,
        cell: impl FnMut() -> Cell,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width, height, cell),
            start: (width / 2, 0),
            end: (width / 2, height - 1),
            generated: false,
        })
    }

    #[cfg(test)]
    /// Builds a fully walled maze with the given row-major weights, for hand-made test layouts.
    pub(crate) fn from_weights(width: u16, height: u16, weights: &[u8]) -> Self {
        assert_eq!(weights.len(), width as usize * height as usize);
        let mut weights = weights.iter().copied();
        Maze::from_cells(width, height, || {
            Cell::with_weight(weights.next().expect("one weight per cell"))
        })
        .expect("test dimensions are valid")
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.len() == 0
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Whether a generator has finished carving this maze.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub(crate) fn set_generated(&mut self, generated: bool) {
        self.generated = generated;
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width() && coord.1 < self.height()
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// The in-bounds cell one step away from `coord` in `direction`, if any.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = coord.0.checked_add_signed(dx as i16)?;
        let y = coord.1.checked_add_signed(dy as i16)?;
        self.is_in_bounds((x, y)).then_some((x, y))
    }

    /// In-bounds neighbors of `coord`, walls ignored, in north, south, east, west order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(coord, d).map(|n| (d, n)))
    }

    /// Whether one can step from `coord` in `direction`: the neighbor exists and no wall is
    /// in between.
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.is_in_bounds(coord)
            && !self[coord].has_wall(direction)
            && self.neighbor(coord, direction).is_some()
    }

    /// Neighbors reachable from `coord` in a single step, in north, south, east, west order.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        self.neighbors(coord)
            .filter(move |&(d, _)| !self[coord].has_wall(d))
    }

    pub fn weight(&self, coord: Coord) -> u8 {
        self[coord].weight()
    }

    /// Removes the wall between `coord` and its neighbor in `direction`, on both cells.
    ///
    /// Returns `true` if a wall was removed, `false` if there was no neighbor in that direction
    /// or the passage was already open.
    pub(crate) fn remove_wall(&mut self, coord: Coord, direction: Direction) -> bool {
        let Some(neighbor) = self.neighbor(coord, direction) else {
            return false;
        };
        let here = self.grid[coord].clear_wall(direction);
        let there = self.grid[neighbor].clear_wall(direction.opposite());
        debug_assert_eq!(here, there, "wall state out of sync at {coord:?} {direction}");
        here || there
    }

    /// Number of walls of `coord` that face an in-bounds neighbor.
    pub fn interior_wall_count(&self, coord: Coord) -> usize {
        self.neighbors(coord)
            .filter(|&(d, _)| self[coord].has_wall(d))
            .count()
    }

    /// Number of open passages between adjacent cell pairs. A perfect maze has exactly
    /// `len() - 1` of them.
    pub fn passage_count(&self) -> usize {
        self.coords()
            .map(|c| {
                [Direction::South, Direction::East]
                    .into_iter()
                    .filter(|&d| self.is_open(c, d))
                    .count()
            })
            .sum()
    }

    pub(crate) fn mark_visited(&mut self, coord: Coord) {
        self.grid[coord].set_visited(true);
    }

    /// Restores every wall and clears the visited flags. Weights are kept.
    pub(crate) fn fill_walls(&mut self) {
        self.grid.iter_mut().for_each(|cell| {
            cell.reset_walls();
            cell.set_visited(false);
        });
        self.generated = false;
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl std::fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Maze")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("generated", &self.generated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_start_and_end_placement() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = Maze::new(7, 5, &mut rng).unwrap();
        assert_eq!(maze.start(), (3, 0));
        assert_eq!(maze.end(), (3, 4));
        assert_eq!(maze.len(), 35);
        assert!(!maze.is_generated());
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Maze::new(0, 4, &mut rng).unwrap_err(),
            MazeError::InvalidDimension {
                width: 0,
                height: 4
            }
        );
        assert!(matches!(
            Maze::new(4, 0, &mut rng),
            Err(MazeError::InvalidDimension { .. })
        ));
        assert!(Maze::new(1, 1, &mut rng).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::from_weights(5, 5, &[0; 25]);
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
        assert_eq!(maze.neighbor((0, 0), Direction::North), None);
        assert_eq!(maze.neighbor((0, 0), Direction::West), None);
        assert_eq!(maze.neighbor((4, 4), Direction::East), None);
        assert_eq!(maze.neighbor((4, 4), Direction::South), None);
    }

    #[test]
    fn test_neighbors_follow_precedence() {
        let maze = Maze::from_weights(3, 3, &[0; 9]);
        let neighbors = maze.neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(
            neighbors,
            vec![
                (Direction::North, (1, 0)),
                (Direction::South, (1, 2)),
                (Direction::East, (2, 1)),
                (Direction::West, (0, 1)),
            ]
        );
    }

    #[test]
    fn test_remove_wall_is_symmetric() {
        let mut maze = Maze::from_weights(3, 3, &[0; 9]);
        assert!(maze.remove_wall((1, 1), Direction::East));
        assert!(!maze[(1, 1)].has_wall(Direction::East));
        assert!(!maze[(2, 1)].has_wall(Direction::West));
        // Removing the same wall from the other side finds it already gone
        assert!(!maze.remove_wall((2, 1), Direction::West));
        assert_eq!(maze.passage_count(), 1);
        assert_eq!(
            maze.open_neighbors((2, 1)).collect::<Vec<_>>(),
            vec![(Direction::West, (1, 1))]
        );
    }

    #[test]
    fn test_boundary_walls_cannot_be_removed() {
        let mut maze = Maze::from_weights(2, 2, &[0; 4]);
        assert!(!maze.remove_wall((0, 0), Direction::North));
        assert!(maze[(0, 0)].has_wall(Direction::North));
        assert!(!maze.is_open((0, 0), Direction::North));
    }

    #[test]
    fn test_fill_walls_keeps_weights() {
        let mut maze = Maze::from_weights(2, 1, &[3, 1]);
        maze.remove_wall((0, 0), Direction::East);
        maze.mark_visited((0, 0));
        maze.fill_walls();
        assert_eq!(maze.passage_count(), 0);
        assert!(!maze[(0, 0)].is_visited());
        assert_eq!(maze.weight((0, 0)), 3);
        assert_eq!(maze.weight((1, 0)), 1);
    }
}
