//! Draw detection.

use tracing::instrument;

use crate::board::{Board, Stone};

/// True when no cell is empty.
#[instrument(level = "trace", skip(board))]
pub fn is_board_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|stone| *stone != Stone::Empty))
}
