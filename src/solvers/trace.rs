use crate::maze::Coord;

/// One step a solver actually took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    pub coord: Coord,
    /// Cells traversed so far, this step included
    pub traversed: usize,
    /// Weight accumulated so far, this step included
    pub weight: u64,
}

/// The ordered walk of a single solver run together with its aggregate cost.
///
/// Backtracking is part of the walk: a cell returned to after a dead end is recorded again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<TraceStep>,
    backtracks: usize,
}

impl Trace {
    pub(crate) fn record(&mut self, coord: Coord, weight: u8) {
        let (traversed, total) = self
            .steps
            .last()
            .map_or((0, 0), |s| (s.traversed, s.weight));
        self.steps.push(TraceStep {
            coord,
            traversed: traversed + 1,
            weight: total + u64::from(weight),
        });
    }

    pub(crate) fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.steps.iter().map(|s| s.coord)
    }

    pub fn last(&self) -> Option<Coord> {
        self.steps.last().map(|s| s.coord)
    }

    /// Total number of cells traversed, revisits included.
    pub fn total_cells(&self) -> usize {
        self.steps.last().map_or(0, |s| s.traversed)
    }

    /// Total weight of every traversed cell, revisits included.
    pub fn total_weight(&self) -> u64 {
        self.steps.last().map_or(0, |s| s.weight)
    }

    /// How many times the solver stepped back out of a dead end.
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cells traversed: {}", self.total_cells())?;
        write!(f, "Cells traversed total weight: {}", self.total_weight())
    }
}
