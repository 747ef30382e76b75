use crate::game::Color;
use serde::{Deserialize, Serialize};

/// An immutable capture of the game state handed to a [`Strategy`][`crate::strategy::Strategy`].
///
/// The order of [`Snapshot::moves`] is significant, remote solvers answer with a position in it.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot<B, M> {
    board: B,
    moves: Vec<M>,
    #[serde(rename = "player")]
    turn: Color,
}

impl<B, M> Snapshot<B, M> {
    /// Captures a position along with its legal moves and the side to move.
    pub fn new(board: B, moves: Vec<M>, turn: Color) -> Self {
        Snapshot { board, moves, turn }
    }

    /// The current position.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// The legal moves, in the order defined by the game engine.
    pub fn moves(&self) -> &[M] {
        &self.moves
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }
}
