use crate::algorithms::a_star::AStar;
use crate::algorithms::bfs::BreadthFirst;
use crate::algorithms::common::{SearchResult, SearchStrategy};
use crate::budget;
use crate::budget::round2;
use crate::grid::{pick_distinct_positions, Grid, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Instant;

/// Selects the strategy used on the next search trigger: Normal runs
/// breadth-first search, Hard runs A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Normal,
    Hard,
}

impl Difficulty {
    fn toggled(self) -> Self {
        match self {
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Normal,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Won,
    Lost,
}

/// One level of the challenge. Owns the grid, sequences the level lifecycle,
/// and records the outcome of the triggered search for the renderer.
pub struct Session {
    pub grid: Grid,
    pub difficulty: Difficulty,
    pub finished: bool,
    pub last_result: Option<SearchResult>,
    pub budget: f64,
    pub time_taken: f64,
    rng: StdRng,
}

impl Session {
    /// Create a level with a freshly randomized distinct start/goal pair and a
    /// budget derived from the obstacle-free grid. Pass a seed for
    /// reproducible placement.
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (start, goal) = pick_distinct_positions(&mut rng, rows, cols);
        let grid = Grid::new(rows, cols, start, goal);
        let budget = budget::compute(&grid);

        Session {
            grid,
            difficulty: Difficulty::Normal,
            finished: false,
            last_result: None,
            budget,
            time_taken: 0.0,
            rng,
        }
    }

    pub fn toggle_blocked(&mut self, pos: Position) {
        self.grid.set_blocked(pos);
    }

    pub fn clear_blocked(&mut self, pos: Position) {
        self.grid.clear_blocked(pos);
    }

    /// Switch between Normal and Hard. Permitted in any state; only affects
    /// the next search trigger.
    pub fn switch_difficulty(&mut self) {
        self.difficulty = self.difficulty.toggled();
    }

    /// Run the active strategy against the current grid. Ignored while the
    /// level is already finished. Records the result and the wall-clock time
    /// of the triggered call, then marks the level finished.
    pub fn run_search(&mut self) {
        if self.finished {
            return;
        }

        let mut strategy: Box<dyn SearchStrategy> = match self.difficulty {
            Difficulty::Normal => Box::new(BreadthFirst::new()),
            Difficulty::Hard => Box::new(AStar::new()),
        };

        let triggered = Instant::now();
        let result = strategy.search(&self.grid, self.grid.start, self.grid.goal);
        let wall = triggered.elapsed();

        self.time_taken = round2(wall.as_secs_f64() * 1e4);
        self.last_result = Some(result);
        self.finished = true;
    }

    /// Replay the current level: obstacles cleared, start/goal and budget
    /// kept.
    pub fn repeat(&mut self) {
        self.grid.reset();
        self.clear_run_state();
    }

    /// Move to the next level: obstacles cleared, start/goal re-randomized
    /// (always distinct), budget recomputed on the cleared grid.
    pub fn advance(&mut self) {
        self.grid.reset();
        let (start, goal) = pick_distinct_positions(&mut self.rng, self.grid.rows, self.grid.cols);
        self.grid.start = start;
        self.grid.goal = goal;
        self.budget = budget::compute(&self.grid);
        self.clear_run_state();
    }

    fn clear_run_state(&mut self) {
        self.finished = false;
        self.time_taken = 0.0;
        self.last_result = None;
    }

    /// Win/loss outcome of a finished level: a run whose measured time reaches
    /// the target wins, a faster one loses. `None` until a search has run.
    pub fn verdict(&self) -> Option<Verdict> {
        if !self.finished {
            return None;
        }
        if self.time_taken >= self.budget {
            Some(Verdict::Won)
        } else {
            Some(Verdict::Lost)
        }
    }
}
