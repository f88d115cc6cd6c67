//! Win condition checking for Omok
//!
//! A move wins when it completes five or more same-owner stones in a row
//! along one of four axes. Overlines count.

use tracing::instrument;

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Check whether the stone at `(row, col)` completes a line of five or more.
///
/// Meant to be called right after placing that stone. Returns `false` for
/// an empty or off-board cell. Each axis is scanned at most four cells in
/// either direction.
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board, row: usize, col: usize) -> bool {
    if row >= board.size() || col >= board.size() {
        return false;
    }
    let pos = Pos::new(row as u8, col as u8);
    let owner = board.get(pos);
    if owner == Stone::Empty {
        return false;
    }

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + run_length(board, pos, owner, dr, dc, WIN_LENGTH - 1)
            + run_length(board, pos, owner, -dr, -dc, WIN_LENGTH - 1);
        count >= WIN_LENGTH
    })
}

/// Find the full winning line through `pos`, if any.
///
/// Unlike [`check_win`] the run is followed to its ends, so an overline is
/// returned whole, ordered end to end along the axis direction.
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    if !Pos::is_valid(pos.row as i32, pos.col as i32) {
        return None;
    }
    let owner = board.get(pos);
    if owner == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, owner, -dr, -dc, usize::MAX);
        let forward = run_length(board, pos, owner, dr, dc, usize::MAX);
        if back + forward + 1 < WIN_LENGTH {
            continue;
        }

        let start = pos.offset(-dr, -dc, back as i32)?;
        let line = (0..=(back + forward) as i32)
            .filter_map(|i| start.offset(dr, dc, i))
            .collect();
        return Some(line);
    }
    None
}

/// Count contiguous `owner` stones after `pos` along `(dr, dc)`, up to `limit`.
fn run_length(board: &Board, pos: Pos, owner: Stone, dr: i32, dc: i32, limit: usize) -> usize {
    let mut count = 0;
    while count < limit {
        match pos.offset(dr, dc, count as i32 + 1) {
            Some(next) if board.get(next) == owner => count += 1,
            _ => break,
        }
    }
    count
}
