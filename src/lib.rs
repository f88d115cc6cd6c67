//! Omok (Gomoku) rules engine
//!
//! The rules core of a board-game platform:
//! - Fixed 15x15 board
//! - 5-in-a-row to win (overlines allowed)
//! - Full board without a winner is a draw
//! - Naive computer opponent choosing uniformly among empty cells
//!
//! # Architecture
//!
//! - [`board`]: Cells, coordinates and the board value
//! - [`rules`]: Win and draw detection
//! - [`game`]: Move application on an immutable game state
//! - [`engine`]: Automated opponent
//! - [`catalog`]: Game identifiers and display metadata
//!
//! The engine keeps no state between calls. Boards and game states are
//! plain values owned by the caller; the random source for the opponent is
//! owned by the caller too.
//!
//! # Quick Start
//!
//! ```
//! use omok::{AiEngine, GameState, GameStatus, Pos};
//!
//! let mut engine = AiEngine::with_seed(1);
//! let game = GameState::new();
//!
//! // Human plays the center, the opponent answers
//! let game = game.play(Pos::new(7, 7)).unwrap();
//! let game = game.play_ai_move(engine.rng_mut()).unwrap();
//!
//! assert_eq!(game.board().stone_count(), 2);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{create_empty_board, Board, Player, Pos, Stone, BOARD_SIZE};
pub use catalog::{GameInfo, GameKind, PlayMode};
pub use engine::{get_random_ai_move, AiEngine, MoveResult, MoveSelector};
pub use error::MoveError;
pub use game::{GameState, GameStatus};
pub use rules::{check_win, find_winning_line, is_board_full};
