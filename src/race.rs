use std::cmp::Ordering;

use crate::config::RaceConfig;
use crate::error::MazeError;
use crate::generators::{generate_maze, get_rng, punch_holes};
use crate::maze::Maze;
use crate::solvers::{Solver, Trace, solve_maze};

/// Both strategies run against the same maze.
#[derive(Debug)]
pub struct Race {
    maze: Maze,
    greedy: (Solver, Trace),
    best_first: (Solver, Trace),
}

impl Race {
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn greedy(&self) -> &Trace {
        &self.greedy.1
    }

    pub fn best_first(&self) -> &Trace {
        &self.best_first.1
    }

    /// The strategy that accumulated less weight, or `None` on a tie.
    pub fn winner(&self) -> Option<Solver> {
        match self
            .greedy
            .1
            .total_weight()
            .cmp(&self.best_first.1.total_weight())
        {
            Ordering::Less => Some(self.greedy.0),
            Ordering::Greater => Some(self.best_first.0),
            Ordering::Equal => None,
        }
    }
}

/// Builds and carves a maze as configured, then solves it with both strategies in parallel.
pub fn run(config: &RaceConfig) -> Result<Race, MazeError> {
    config.validate()?;
    let mut rng = get_rng(config.seed);

    let mut maze = Maze::new(config.width, config.height, &mut rng)?;
    generate_maze(&mut maze, &mut rng);
    if config.holes > 0 {
        punch_holes(&mut maze, config.holes, &mut rng)?;
    }
    tracing::debug!("[race] maze ready: {:?}", maze);

    let [greedy_solver, best_first_solver] = config.solvers();
    let (greedy, best_first) = std::thread::scope(|s| {
        let greedy = s.spawn(|| solve_maze(&maze, greedy_solver));
        let best_first = s.spawn(|| solve_maze(&maze, best_first_solver));
        (
            greedy
                .join()
                .unwrap_or_else(|e| std::panic::resume_unwind(e)),
            best_first
                .join()
                .unwrap_or_else(|e| std::panic::resume_unwind(e)),
        )
    });

    let race = Race {
        greedy: (greedy_solver, greedy?),
        best_first: (best_first_solver, best_first?),
        maze,
    };
    match race.winner() {
        Some(solver) => tracing::info!("[race] {} wins", solver),
        None => tracing::info!("[race] tie at total weight {}", race.greedy().total_weight()),
    }
    Ok(race)
}
