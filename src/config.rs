use crate::error::MazeError;
use crate::solvers::Solver;

/// Settings for a single [`race`](crate::race::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceConfig {
    /// Maze width in cells
    pub width: u16,
    /// Maze height in cells
    pub height: u16,
    /// Number of cells to punch open after carving, at most `width * height`
    pub holes: usize,
    /// Simulated steps per candidate for the greedy solver
    pub lookahead: usize,
    /// Seed for every random draw of the run; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            holes: 0,
            lookahead: Solver::DEFAULT_LOOKAHEAD,
            seed: None,
        }
    }
}

impl RaceConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_holes(mut self, holes: usize) -> Self {
        self.holes = holes;
        self
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Rejects settings that would fail later, before any work is done.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.holes > self.capacity() {
            return Err(MazeError::InvalidHoleCount {
                holes: self.holes,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// The two competing strategies, greedy first.
    pub fn solvers(&self) -> [Solver; 2] {
        [
            Solver::GreedyLookahead {
                lookahead: self.lookahead,
            },
            Solver::WeightedBestFirst,
        ]
    }
}
