use rand::Rng;
use std::collections::HashSet;

/// Step deltas in the fixed expansion order: right, down, left, up.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Blocked,
}

#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<Cell>>,
    pub start: Position,
    pub goal: Position,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, start: Position, goal: Position) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![vec![Cell::Free; cols]; rows],
            start,
            goal,
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == Cell::Blocked
    }

    /// Marks `pos` Blocked. Requests targeting the current start or goal cell
    /// are silently ignored so both always stay free.
    pub fn set_blocked(&mut self, pos: Position) {
        if pos == self.start || pos == self.goal {
            return;
        }
        self.cells[pos.row][pos.col] = Cell::Blocked;
    }

    pub fn clear_blocked(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Cell::Free;
    }

    /// Sets every cell Free.
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::Free;
            }
        }
    }

    /// Returns the in-bounds, unblocked neighbors of `pos` in the fixed
    /// expansion order. The order decides which of several equal-length
    /// paths a search reports.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::new();
        let (row, col) = (pos.row as i32, pos.col as i32);

        for (dr, dc) in &DIRECTIONS {
            let nr = row + dr;
            let nc = col + dc;

            if nr >= 0 && nr < self.rows as i32 && nc >= 0 && nc < self.cols as i32 {
                let next = Position {
                    row: nr as usize,
                    col: nc as usize,
                };
                if self.cells[next.row][next.col] != Cell::Blocked {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }

    /// Print a visual representation of the grid with path and visited overlays
    pub fn print_grid(&self, path: &[Position], visited: &HashSet<Position>) {
        println!("Legend: S=Start, G=Goal, *=Path, o=Visited, #=Blocked, .=Free");

        // Print column numbers header
        print!("   ");
        for col in 0..self.cols {
            print!("{:2}", col % 10);
        }
        println!();

        for row in 0..self.rows {
            // Print row number
            print!("{:2} ", row);

            for col in 0..self.cols {
                let pos = Position { row, col };
                let char = if pos == self.start {
                    'S'
                } else if pos == self.goal {
                    'G'
                } else if path.contains(&pos) {
                    '*'
                } else if visited.contains(&pos) {
                    'o'
                } else {
                    match self.cells[row][col] {
                        Cell::Blocked => '#',
                        Cell::Free => '.',
                    }
                };
                print!("{} ", char);
            }
            println!();
        }
        println!();
    }
}

/// Sample a random start/goal pair on a `rows` x `cols` grid, resampling the
/// goal until it differs from the start.
pub fn pick_distinct_positions(rng: &mut impl Rng, rows: usize, cols: usize) -> (Position, Position) {
    let start = Position {
        row: rng.gen_range(0..rows),
        col: rng.gen_range(0..cols),
    };
    let mut goal = Position {
        row: rng.gen_range(0..rows),
        col: rng.gen_range(0..cols),
    };
    while goal == start {
        goal = Position {
            row: rng.gen_range(0..rows),
            col: rng.gen_range(0..cols),
        };
    }
    (start, goal)
}
