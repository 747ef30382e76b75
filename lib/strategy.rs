use crate::game::Snapshot;
use crate::solver::{EmptyLegalMoveSet, EncodingError, ExchangeError};
use crate::solver::{InvalidResponseError, TimeoutError, TransportError};
use derive_more::{Display, Error, From};
use std::sync::Arc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::Span;

mod config;
mod registry;

pub use config::*;
pub use registry::*;

/// The reason why a [`Strategy`] failed to choose a move.
///
/// The turn should be treated as unresolved, no move was chosen on the strategy's behalf.
#[derive(Debug, Display, Error, From)]
pub enum StrategyError {
    EmptyLegalMoveSet(EmptyLegalMoveSet),
    Encoding(EncodingError),
    Transport(TransportError),
    Timeout(TimeoutError),
    InvalidResponse(InvalidResponseError),
}

impl From<ExchangeError> for StrategyError {
    fn from(e: ExchangeError) -> Self {
        match e {
            ExchangeError::Transport(e) => e.into(),
            ExchangeError::Timeout(e) => e.into(),
        }
    }
}

/// Trait for types that choose one of the legal moves in a [`Snapshot`].
#[cfg_attr(test, mockall::automock)]
pub trait Strategy<B, M> {
    /// Finds the best move among [`Snapshot::moves`].
    ///
    /// This may block the calling thread for as long as the strategy needs,
    /// see [`spawn`] to run it in the background instead.
    fn find_best_move(&self, snapshot: &Snapshot<B, M>) -> Result<M, StrategyError>;
}

/// Runs [`Strategy::find_best_move`] on the blocking thread pool of the current runtime.
///
/// The returned handle resolves once the strategy has an answer, leaving the calling
/// thread free in the meantime.
///
/// # Panics
///
/// Panics if called outside of a tokio runtime.
pub fn spawn<B, M>(
    strategy: Arc<dyn Strategy<B, M> + Send + Sync>,
    snapshot: Snapshot<B, M>,
) -> JoinHandle<Result<M, StrategyError>>
where
    B: Send + 'static,
    M: Send + 'static,
{
    let span = Span::current();
    spawn_blocking(move || span.in_scope(|| strategy.find_best_move(&snapshot)))
}
