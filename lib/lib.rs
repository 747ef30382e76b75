/// Game state snapshots and the reversi vocabulary.
pub mod game;
/// Move selection delegated to a remote solver.
pub mod solver;
/// Interchangeable move-selection strategies.
pub mod strategy;
/// Assorted utilities.
pub mod util;
