//! Game rules for Omok
//!
//! - Win conditions (5 or more in a row, overlines allowed)
//! - Draw (board full)

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::is_board_full;
pub use win::{check_win, find_winning_line, DIRECTIONS, WIN_LENGTH};
