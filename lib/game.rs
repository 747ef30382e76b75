mod color;
mod snapshot;

/// The vocabulary of reversi positions as spoken by remote solvers.
pub mod reversi;

pub use color::*;
pub use snapshot::*;
