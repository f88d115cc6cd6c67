//! Board structure

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Pos, Stone, BOARD_SIZE};

/// One board row
pub type Row = [Stone; BOARD_SIZE];

/// 15x15 Omok board indexed `[row][col]`.
///
/// Rows are owned arrays, so a clone never shares storage with the original
/// and a board kept in a move history is unaffected by later moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Row; BOARD_SIZE],
}

/// Create a new board with every cell empty.
pub fn create_empty_board() -> Board {
    Board::new()
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    #[inline]
    pub fn row(&self, row: usize) -> &Row {
        &self.cells[row]
    }

    #[inline]
    pub fn rows(&self) -> &[Row; BOARD_SIZE] {
        &self.cells
    }

    /// Mutable access to one row, for setting up positions
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut Row {
        &mut self.cells[row]
    }

    /// Place a stone in place (no rule checks).
    /// Use `GameState::apply_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.row as usize][pos.col as usize] = stone;
    }

    /// Copy of this board with one cell changed
    #[must_use]
    pub fn with_stone(&self, pos: Pos, stone: Stone) -> Board {
        let mut next = self.clone();
        next.place_stone(pos, stone);
        next
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, stone)| **stone == Stone::Empty)
                .map(move |(c, _)| Pos::new(r as u8, c as u8))
        })
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|stone| **stone != Stone::Empty)
            .count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{:3}", c)?;
        }
        writeln!(f)?;

        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:2} ", r)?;
            for stone in row {
                write!(f, "{:>3}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
