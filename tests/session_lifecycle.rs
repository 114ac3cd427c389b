use pathfinding::prelude::astar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reverse_pathfinding::algorithms::a_star::AStar;
use reverse_pathfinding::algorithms::bfs::BreadthFirst;
use reverse_pathfinding::algorithms::common::SearchStrategy;
use reverse_pathfinding::grid::{pick_distinct_positions, Grid, Position};
use reverse_pathfinding::session::{Difficulty, Session};

/// Build a grid with a random distinct start/goal pair and randomly scattered
/// obstacles, reproducible from the seed.
fn scattered_grid(seed: u64, rows: usize, cols: usize, blocks: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let (start, goal) = pick_distinct_positions(&mut rng, rows, cols);
    let mut grid = Grid::new(rows, cols, start, goal);
    for _ in 0..blocks {
        let pos = Position {
            row: rng.gen_range(0..rows),
            col: rng.gen_range(0..cols),
        };
        grid.set_blocked(pos);
    }
    grid
}

#[test]
fn strategies_agree_on_reachability_and_length() {
    for seed in 0..25 {
        let grid = scattered_grid(seed, 12, 12, 45);

        let mut bfs = BreadthFirst::new();
        let mut a_star = AStar::new();
        let bfs_result = bfs.search(&grid, grid.start, grid.goal);
        let a_star_result = a_star.search(&grid, grid.start, grid.goal);

        assert_eq!(bfs_result.found, a_star_result.found, "seed {}", seed);
        if bfs_result.found {
            assert_eq!(bfs_result.steps(), a_star_result.steps(), "seed {}", seed);
        } else {
            assert!(bfs_result.path.is_empty());
            assert!(a_star_result.path.is_empty());
        }
    }
}

#[test]
fn path_lengths_match_reference_astar() {
    for seed in 0..25 {
        let grid = scattered_grid(100 + seed, 10, 14, 50);

        let mut searcher = AStar::new();
        let ours = searcher.search(&grid, grid.start, grid.goal);

        let reference = astar(
            &grid.start,
            |&p| {
                grid.neighbors(p)
                    .into_iter()
                    .map(|n| (n, 1u32))
                    .collect::<Vec<_>>()
            },
            |&p| {
                ((p.row as i32 - grid.goal.row as i32).abs()
                    + (p.col as i32 - grid.goal.col as i32).abs()) as u32
            },
            |&p| p == grid.goal,
        );

        match reference {
            Some((path, cost)) => {
                assert!(ours.found, "seed {}", seed);
                assert_eq!(ours.steps() as u32, cost, "seed {}", seed);
                assert_eq!(ours.path.len(), path.len(), "seed {}", seed);
            }
            None => assert!(!ours.found, "seed {}", seed),
        }
    }
}

#[test]
fn bfs_paths_are_never_longer_than_any_other_route() {
    // The reference A* cost doubles as "length of some valid route"; BFS must
    // never report more steps than it.
    for seed in 0..15 {
        let grid = scattered_grid(200 + seed, 9, 9, 25);

        let mut bfs = BreadthFirst::new();
        let ours = bfs.search(&grid, grid.start, grid.goal);

        let reference = astar(
            &grid.start,
            |&p| {
                grid.neighbors(p)
                    .into_iter()
                    .map(|n| (n, 1u32))
                    .collect::<Vec<_>>()
            },
            |_| 0u32,
            |&p| p == grid.goal,
        );

        match reference {
            Some((_, cost)) => {
                assert!(ours.found, "seed {}", seed);
                assert!(ours.steps() as u32 <= cost, "seed {}", seed);
            }
            None => assert!(!ours.found, "seed {}", seed),
        }
    }
}

#[test]
fn session_lifecycle_repeat_then_advance() {
    let mut session = Session::new(8, 8, Some(42));
    let start = session.grid.start;
    let goal = session.grid.goal;
    let budget = session.budget;

    // Level 1 on normal difficulty.
    assert_eq!(session.difficulty, Difficulty::Normal);
    session.run_search();
    assert!(session.finished);
    assert!(session.verdict().is_some());
    let result = session.last_result.as_ref().unwrap();
    assert!(result.found);
    assert_eq!(result.steps(), manhattan(start, goal));

    // Replay the same level on hard difficulty.
    session.repeat();
    assert_eq!(session.grid.start, start);
    assert_eq!(session.grid.goal, goal);
    assert_eq!(session.budget, budget);
    assert!(!session.finished);

    session.switch_difficulty();
    session.run_search();
    let result = session.last_result.as_ref().unwrap();
    assert!(result.found);
    assert_eq!(result.steps(), manhattan(start, goal));

    // Next level gets fresh endpoints and run state.
    session.advance();
    assert_ne!(session.grid.start, session.grid.goal);
    assert!(!session.finished);
    assert_eq!(session.time_taken, 0.0);
    assert!(session.last_result.is_none());
}

#[test]
fn walled_in_goal_finishes_with_no_path() {
    let mut session = Session::new(8, 8, Some(13));
    session.grid.start = Position { row: 0, col: 0 };
    session.grid.goal = Position { row: 7, col: 7 };
    for neighbor in session.grid.neighbors(session.grid.goal) {
        session.toggle_blocked(neighbor);
    }

    session.run_search();
    assert!(session.finished);
    assert!(session.verdict().is_some());
    let result = session.last_result.as_ref().unwrap();
    assert!(!result.found);
    assert!(result.path.is_empty());
}

fn manhattan(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
