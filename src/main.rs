use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reverse_pathfinding::config::Config;
use reverse_pathfinding::grid::Position;
use reverse_pathfinding::session::Session;
use reverse_pathfinding::stats::RunReport;

fn main() {
    let config = Config::parse();

    match config.difficulty.as_str() {
        "normal" | "hard" => {}
        other => {
            eprintln!("Unknown difficulty '{}': select 'normal' or 'hard'", other);
            std::process::exit(1);
        }
    }

    println!("Starting reverse pathfinding challenge...");
    println!("Grid size: {}x{}", config.rows, config.cols);
    println!(
        "Difficulty: {} | Obstacles per level: {}",
        config.difficulty, config.num_obstacles
    );
    println!();

    let mut session = Session::new(config.rows, config.cols, config.seed);
    if config.difficulty == "hard" {
        session.switch_difficulty();
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for level in 1..=config.levels {
        println!("=== LEVEL {} ===", level);
        println!(
            "Start: ({}, {}) | Goal: ({}, {})",
            session.grid.start.row, session.grid.start.col, session.grid.goal.row,
            session.grid.goal.col
        );

        scatter_obstacles(&mut session, &mut rng, config.num_obstacles);
        session.run_search();

        if !config.no_visualization {
            if let Some(result) = &session.last_result {
                session.grid.print_grid(&result.path, &result.visited);
            }
        }
        println!("{}", RunReport::new(&session));

        if level < config.levels {
            session.advance();
        }
    }
}

/// Scatter obstacles on random free cells, standing in for interactive
/// painting. Attempt-capped so a crowded grid cannot loop forever.
fn scatter_obstacles(session: &mut Session, rng: &mut StdRng, num_obstacles: usize) {
    let (rows, cols) = (session.grid.rows, session.grid.cols);
    let mut placed = 0;
    let mut attempts = 0;

    while placed < num_obstacles && attempts < num_obstacles * 3 {
        let pos = Position {
            row: rng.gen_range(0..rows),
            col: rng.gen_range(0..cols),
        };
        if pos != session.grid.start && pos != session.grid.goal && !session.grid.is_blocked(pos) {
            session.toggle_blocked(pos);
            placed += 1;
        }
        attempts += 1;
    }
}
