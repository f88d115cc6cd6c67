//! Automated opponent
//!
//! The opponent is deliberately naive: it picks uniformly at random among
//! the empty cells. There is no look-ahead, blocking or scoring.
//!
//! The random source belongs to the caller. [`get_random_ai_move`] borrows
//! any `rand::Rng`; [`AiEngine`] owns a seedable `StdRng` for callers that
//! want one generator per game.
//!
//! # Example
//!
//! ```
//! use omok::{AiEngine, Board, Pos, Stone};
//!
//! let mut engine = AiEngine::with_seed(42);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::PlayerOne);
//!
//! let pos = engine.get_move(&board).unwrap();
//! assert!(board.is_empty(pos));
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, warn};

use crate::board::{Board, Pos};
use crate::error::MoveError;

/// Pick a uniformly random empty cell.
///
/// Candidates are collected in row-major order before sampling. Fails with
/// [`MoveError::NoLegalMoves`] on a full board; callers should have declared
/// a draw before asking.
#[instrument(skip(board, rng))]
pub fn get_random_ai_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Pos, MoveError> {
    let candidates: Vec<Pos> = board.empty_cells().collect();
    if candidates.is_empty() {
        warn!("automated move requested on a full board");
        return Err(MoveError::NoLegalMoves);
    }
    let pos = candidates[rng.random_range(0..candidates.len())];
    debug!(%pos, candidates = candidates.len(), "random move selected");
    Ok(pos)
}

/// Move selection policy for an automated player.
pub trait MoveSelector {
    /// Choose a legal move on `board`.
    fn select_move(&mut self, board: &Board) -> Result<Pos, MoveError>;
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move
    pub best_move: Pos,
    /// Number of empty cells the move was drawn from
    pub candidates: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

/// Random opponent owning its generator.
#[derive(Debug, Clone)]
pub struct AiEngine {
    rng: StdRng,
}

impl AiEngine {
    /// Engine seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible engine; equal seeds give equal move sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn get_move(&mut self, board: &Board) -> Result<Pos, MoveError> {
        get_random_ai_move(board, &mut self.rng)
    }

    pub fn get_move_with_stats(&mut self, board: &Board) -> Result<MoveResult, MoveError> {
        let start = Instant::now();
        let candidates = board.empty_cells().count();
        let best_move = self.get_move(board)?;
        Ok(MoveResult {
            best_move,
            candidates,
            time_us: start.elapsed().as_micros() as u64,
        })
    }

    /// Mutable access to the generator, for driving [`crate::GameState::play_ai_move`].
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for AiEngine {
    fn select_move(&mut self, board: &Board) -> Result<Pos, MoveError> {
        self.get_move(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{create_empty_board, Stone, BOARD_SIZE};

    fn board_with_single_hole(hole: Pos) -> Board {
        let mut board = create_empty_board();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let stone = if (r * 3 + c) % 2 == 0 {
                    Stone::PlayerOne
                } else {
                    Stone::PlayerTwo
                };
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        board.place_stone(hole, Stone::Empty);
        board
    }

    #[test]
    fn test_move_is_on_empty_cell() {
        let mut engine = AiEngine::with_seed(7);
        let mut board = create_empty_board();
        for c in 0..10 {
            board.place_stone(Pos::new(0, c), Stone::PlayerOne);
        }

        for _ in 0..200 {
            let pos = engine.get_move(&board).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let hole = Pos::new(10, 10);
        let board = board_with_single_hole(hole);
        let mut engine = AiEngine::new();

        for _ in 0..20 {
            assert_eq!(engine.get_move(&board), Ok(hole));
        }
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = board_with_single_hole(Pos::new(0, 0));
        board.place_stone(Pos::new(0, 0), Stone::PlayerTwo);

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(get_random_ai_move(&board, &mut rng), Err(MoveError::NoLegalMoves));

        let mut engine = AiEngine::with_seed(1);
        assert_eq!(engine.get_move_with_stats(&board), Err(MoveError::NoLegalMoves));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = create_empty_board();
        let mut a = AiEngine::with_seed(1234);
        let mut b = AiEngine::with_seed(1234);

        for _ in 0..10 {
            assert_eq!(a.get_move(&board), b.get_move(&board));
        }
    }

    #[test]
    fn test_caller_owned_rng() {
        let board = create_empty_board();
        let mut rng = rand::rng();
        let pos = get_random_ai_move(&board, &mut rng).unwrap();
        assert!(Pos::is_valid(pos.row as i32, pos.col as i32));
    }

    #[test]
    fn test_every_cell_reachable() {
        // Three empty cells; each should be drawn at some point
        let mut board = board_with_single_hole(Pos::new(0, 0));
        board.place_stone(Pos::new(7, 7), Stone::Empty);
        board.place_stone(Pos::new(14, 14), Stone::Empty);

        let mut engine = AiEngine::with_seed(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(engine.get_move(&board).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_stats_report_candidates() {
        let mut board = create_empty_board();
        board.place_stone(Pos::new(7, 7), Stone::PlayerOne);

        let mut engine = AiEngine::with_seed(3);
        let result = engine.get_move_with_stats(&board).unwrap();
        assert_eq!(result.candidates, BOARD_SIZE * BOARD_SIZE - 1);
        assert_ne!(result.best_move, Pos::new(7, 7));
    }

    #[test]
    fn test_selector_trait_object() {
        let board = board_with_single_hole(Pos::new(3, 4));
        let mut selector: Box<dyn MoveSelector> = Box::new(AiEngine::with_seed(5));
        assert_eq!(selector.select_move(&board), Ok(Pos::new(3, 4)));
    }
}
