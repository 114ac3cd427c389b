use crate::algorithms::common::{reconstruct_path, SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::time::Instant;

/// Unweighted breadth-first search. Explores the grid in strict FIFO order,
/// so the first time the goal is dequeued the reconstructed path has the
/// minimum possible number of steps.
#[derive(Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl SearchStrategy for BreadthFirst {
    fn search(&mut self, grid: &Grid, start: Position, goal: Position) -> SearchResult {
        let started = Instant::now();

        let mut frontier = VecDeque::new();
        let mut visited = FxHashSet::default();
        let mut parents: FxHashMap<Position, Position> = FxHashMap::default();

        frontier.push_back(start);
        visited.insert(start);

        let mut found = false;
        while let Some(current) = frontier.pop_front() {
            if current == goal {
                found = true;
                break;
            }

            for neighbor in grid.neighbors(current) {
                // A cell is enqueued at most once: marked visited on enqueue,
                // not on dequeue.
                if visited.insert(neighbor) {
                    parents.insert(neighbor, current);
                    frontier.push_back(neighbor);
                }
            }
        }

        let path = if found {
            reconstruct_path(&parents, goal)
        } else {
            Vec::new()
        };

        SearchResult {
            found,
            path,
            visited: visited.into_iter().collect(),
            elapsed: started.elapsed(),
        }
    }
}
