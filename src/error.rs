//! Move errors
//!
//! Every variant is recoverable: callers report it and re-prompt, or ignore
//! the request.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::board::{Player, Pos};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Error)]
pub enum MoveError {
    /// Coordinates outside `[0, BOARD_SIZE - 1]`.
    #[display("Coordinates ({row}, {col}) are off the board")]
    InvalidCoordinates { row: i32, col: i32 },

    /// The target cell already holds a stone.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Pos),

    /// The move came from the player who is not on turn.
    #[display("It's not {_0}'s turn")]
    WrongTurn(#[error(not(source))] Player),

    /// A winner or a draw is already established.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Automated move requested on a full board.
    #[display("No legal moves left")]
    NoLegalMoves,
}
