use crate::game::{Color, Snapshot};
use crate::strategy::StrategyError;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// The reason why a [`Snapshot`] without legal moves cannot be solved.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "there are no legal moves to choose from")]
pub struct EmptyLegalMoveSet;

/// The reason why a [`Snapshot`] could not be represented on the wire.
#[derive(Debug, Display, Error, From)]
#[display(fmt = "failed to encode the game state")]
pub struct EncodingError(serde_json::Error);

/// The payload of a single exchange with a remote solver.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SolveRequest {
    board: Value,
    moves: Vec<Value>,
    player: Color,
    ai: String,
}

impl SolveRequest {
    /// Encodes a [`Snapshot`] for the solver strategy tagged `ai`.
    ///
    /// The legal moves keep their order, so the solver's answer indexes into
    /// [`Snapshot::moves`].
    #[instrument(level = "trace", skip(snapshot), fields(moves = snapshot.moves().len()), err)]
    pub fn encode<B, M>(snapshot: &Snapshot<B, M>, ai: &str) -> Result<Self, StrategyError>
    where
        B: Serialize,
        M: Serialize,
    {
        if snapshot.moves().is_empty() {
            return Err(EmptyLegalMoveSet.into());
        }

        Ok(SolveRequest {
            board: serde_json::to_value(snapshot.board()).map_err(EncodingError::from)?,
            moves: snapshot
                .moves()
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()
                .map_err(EncodingError::from)?,
            player: snapshot.turn(),
            ai: ai.to_string(),
        })
    }

    /// The encoded position.
    pub fn board(&self) -> &Value {
        &self.board
    }

    /// The encoded legal moves.
    pub fn moves(&self) -> &[Value] {
        &self.moves
    }

    /// The side to move.
    pub fn player(&self) -> Color {
        self.player
    }

    /// The tag of the solver strategy.
    pub fn ai(&self) -> &str {
        &self.ai
    }
}
