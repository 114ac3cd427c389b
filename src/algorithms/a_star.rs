use crate::algorithms::common::{reconstruct_path, SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Priority key for the open frontier: f = g + heuristic, with g kept
/// alongside to recognise stale entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Score {
    f: u32,
    g: u32,
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison to make BinaryHeap a min-heap
        match other.f.cmp(&self.f) {
            Ordering::Equal => other.g.cmp(&self.g),
            ord => ord,
        }
    }
}

/// Manhattan distance, admissible and consistent for 4-directional unit-cost
/// movement.
fn heuristic(a: Position, b: Position) -> u32 {
    ((a.row as i32 - b.row as i32).abs() + (a.col as i32 - b.col as i32).abs()) as u32
}

/// Heuristic best-first search. Expanding the goal yields an optimal path, so
/// the reported length always matches breadth-first search on the same grid.
#[derive(Default)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }
}

impl SearchStrategy for AStar {
    fn search(&mut self, grid: &Grid, start: Position, goal: Position) -> SearchResult {
        let started = Instant::now();

        let mut open: BinaryHeap<(Score, Position)> = BinaryHeap::new();
        let mut g_scores: FxHashMap<Position, u32> = FxHashMap::default();
        let mut parents: FxHashMap<Position, Position> = FxHashMap::default();
        let mut expanded = FxHashSet::default();

        g_scores.insert(start, 0);
        open.push((
            Score {
                f: heuristic(start, goal),
                g: 0,
            },
            start,
        ));

        let mut found = false;
        while let Some((score, current)) = open.pop() {
            let current_g = g_scores.get(&current).copied().unwrap_or(u32::MAX);

            // Lazy deletion: a later g improvement leaves outdated duplicates
            // in the heap. Skip any entry that no longer matches the cell's
            // best known score.
            if score.g > current_g {
                continue;
            }
            expanded.insert(current);

            if current == goal {
                found = true;
                break;
            }

            for neighbor in grid.neighbors(current) {
                let tentative = current_g + 1;
                if tentative < g_scores.get(&neighbor).copied().unwrap_or(u32::MAX) {
                    parents.insert(neighbor, current);
                    g_scores.insert(neighbor, tentative);
                    open.push((
                        Score {
                            f: tentative + heuristic(neighbor, goal),
                            g: tentative,
                        },
                        neighbor,
                    ));
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
            visited: expanded.into_iter().collect(),
            elapsed: started.elapsed(),
        }
    }
}
