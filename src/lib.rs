//! Grid pathfinding challenge: paint obstacles on a grid, then trigger one of
//! two interchangeable search strategies and race its measured time against a
//! per-level target derived from a baseline search.

pub mod algorithms;
pub mod budget;
pub mod config;
pub mod grid;
pub mod session;
pub mod stats;
