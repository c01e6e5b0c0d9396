use rand::Rng;

/// The four cardinal directions a cell can be left through.
///
/// The declaration order is also the tie-break precedence used by both solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in precedence order: north, south, east, west.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Offset of a single step in this direction. North is towards `y = 0`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Wall flags of a single cell. `true` means the wall is present and blocks movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Walls {
    pub const ALL: Walls = Walls {
        north: true,
        south: true,
        east: true,
        west: true,
    };

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Returns `true` if the wall was present.
    fn clear(&mut self, direction: Direction) -> bool {
        let wall = match direction {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        };
        std::mem::replace(wall, false)
    }

    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| self.has(d)).count()
    }
}

/// One position of the maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    walls: Walls,
    /// Only meaningful while a generator is carving.
    visited: bool,
    weight: u8,
}

impl Cell {
    pub const MIN_WEIGHT: u8 = 0;
    pub const MAX_WEIGHT: u8 = 4;

    /// A fully walled, unvisited cell with a uniformly drawn weight.
    pub fn random(rng: &mut impl Rng) -> Self {
        Cell::with_weight(rng.random_range(Cell::MIN_WEIGHT..=Cell::MAX_WEIGHT))
    }

    pub(crate) fn with_weight(weight: u8) -> Self {
        Cell {
            walls: Walls::ALL,
            visited: false,
            weight,
        }
    }

    /// Traversal cost of entering this cell.
    pub fn weight(&self) -> u8 {
        self.weight
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Clears one side only. Callers must clear the matching side of the neighbor too.
    pub(crate) fn clear_wall(&mut self, direction: Direction) -> bool {
        self.walls.clear(direction)
    }

    pub(crate) fn reset_walls(&mut self) {
        self.walls = Walls::ALL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_cell_is_walled_and_unvisited() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let cell = Cell::random(&mut rng);
            assert_eq!(cell.walls(), Walls::ALL);
            assert!(!cell.is_visited());
            assert!((Cell::MIN_WEIGHT..=Cell::MAX_WEIGHT).contains(&cell.weight()));
        }
    }

    #[test]
    fn test_clear_wall_reports_previous_state() {
        let mut cell = Cell::with_weight(2);
        assert!(cell.clear_wall(Direction::East));
        assert!(!cell.clear_wall(Direction::East));
        assert!(!cell.has_wall(Direction::East));
        assert_eq!(cell.walls().count(), 3);
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
