use crate::session::{Difficulty, Session, Verdict};
use std::fmt;
use std::time::Duration;

/// Everything the renderer shows for one frame: the active difficulty, the
/// target and measured times, the last search's diagnostics, and the verdict.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub difficulty: Difficulty,
    pub budget: f64,
    pub time_taken: f64,
    pub finished: bool,
    pub found: bool,
    pub path_steps: usize,
    pub cells_visited: usize,
    pub search_elapsed: Duration,
    pub verdict: Option<Verdict>,
}

impl RunReport {
    pub fn new(session: &Session) -> Self {
        let (found, path_steps, cells_visited, search_elapsed) = match &session.last_result {
            Some(result) => (
                result.found,
                result.steps(),
                result.visited.len(),
                result.elapsed,
            ),
            None => (false, 0, 0, Duration::ZERO),
        };

        RunReport {
            difficulty: session.difficulty,
            budget: session.budget,
            time_taken: session.time_taken,
            finished: session.finished,
            found,
            path_steps,
            cells_visited,
            search_elapsed,
            verdict: session.verdict(),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Difficulty: {}", self.difficulty)?;
        writeln!(f, "Target Time: {:.2}s", self.budget)?;
        writeln!(f, "Time Taken: {:.2}s", self.time_taken)?;

        if self.finished {
            if self.found {
                writeln!(
                    f,
                    "Path: {} steps | Cells visited: {} | Search took {:.2?}",
                    self.path_steps, self.cells_visited, self.search_elapsed
                )?;
            } else {
                writeln!(
                    f,
                    "Path: none | Cells visited: {} | Search took {:.2?}",
                    self.cells_visited, self.search_elapsed
                )?;
            }
            match self.verdict {
                Some(Verdict::Won) => {
                    writeln!(f, "You won! Advance to the next level?")?;
                }
                Some(Verdict::Lost) => {
                    writeln!(f, "You lost. Repeat the level to try again.")?;
                }
                None => {}
            }
        }
        Ok(())
    }
}
