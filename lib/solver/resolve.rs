use crate::solver::SolveResponse;
use derive_more::{Display, Error};

/// The reason why the solver's answer does not identify a legal move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidResponseError {
    #[display(fmt = "the solver failed to choose a move: {}", reason)]
    Failed {
        #[error(not(source))]
        reason: String,
    },

    #[display(fmt = "the solver chose move #{} out of {}", index, moves)]
    OutOfRange { index: i128, moves: usize },
}

/// Maps the solver's answer onto one of the legal `moves`.
///
/// Never falls back to some other move: any index outside of `0..moves.len()` is an error.
pub fn resolve<M: Clone>(response: &SolveResponse, moves: &[M]) -> Result<M, InvalidResponseError> {
    match *response {
        SolveResponse::Failed(ref reason) => Err(InvalidResponseError::Failed {
            reason: reason.clone(),
        }),

        SolveResponse::Chosen(index) => usize::try_from(index)
            .ok()
            .and_then(|i| moves.get(i))
            .cloned()
            .ok_or(InvalidResponseError::OutOfRange {
                index,
                moves: moves.len(),
            }),
    }
}
