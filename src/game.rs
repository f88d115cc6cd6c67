//! Game state and move application
//!
//! [`GameState`] is a value. Applying a move validates it and returns a new
//! state; the old one, including its board, stays intact. That is what
//! makes move history and undo cheap to reason about.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{create_empty_board, Board, Player, Pos};
use crate::engine::get_random_ai_move;
use crate::error::MoveError;
use crate::rules::{check_win, is_board_full};

/// Status of a game, derived from the board after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Status after `pos` was just played on `board`.
    pub fn after_move(board: &Board, pos: Pos) -> GameStatus {
        if check_win(board, pos.row as usize, pos.col as usize) {
            match board.get(pos).player() {
                Some(player) => GameStatus::Won(player),
                None => GameStatus::InProgress,
            }
        } else if is_board_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Caller-owned game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move: Option<Pos>,
    status: GameStatus,
    history: Vec<(Pos, Player)>,
}

impl GameState {
    /// Fresh game, `PlayerOne` to move.
    pub fn new() -> Self {
        Self {
            board: create_empty_board(),
            current_player: Player::PlayerOne,
            last_move: None,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    /// Check a move without applying it.
    pub fn validate(&self, player: Player, pos: Pos) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if player != self.current_player {
            return Err(MoveError::WrongTurn(player));
        }
        if !Pos::is_valid(pos.row as i32, pos.col as i32) {
            return Err(MoveError::InvalidCoordinates {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        Ok(())
    }

    /// Apply `player`'s stone at `pos`, returning the next state.
    ///
    /// On a win the turn stays with the winner; on a full board without a
    /// win the game is drawn; otherwise the turn passes to the opponent.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn apply_move(&self, player: Player, pos: Pos) -> Result<GameState, MoveError> {
        self.validate(player, pos)?;

        let board = self.board.with_stone(pos, player.stone());
        let status = GameStatus::after_move(&board, pos);
        let current_player = match status {
            GameStatus::InProgress => player.opponent(),
            _ => player,
        };
        let mut history = self.history.clone();
        history.push((pos, player));

        debug!(%pos, %player, ?status, "move applied");
        match status {
            GameStatus::Won(winner) => info!(%winner, moves = history.len(), "game won"),
            GameStatus::Draw => info!(moves = history.len(), "game drawn"),
            GameStatus::InProgress => {}
        }

        Ok(GameState {
            board,
            current_player,
            last_move: Some(pos),
            status,
            history,
        })
    }

    /// Apply a move for whoever is on turn.
    pub fn play(&self, pos: Pos) -> Result<GameState, MoveError> {
        self.apply_move(self.current_player, pos)
    }

    /// Apply a move from raw coordinates, as received from a front end.
    pub fn play_at(&self, player: Player, row: i32, col: i32) -> Result<GameState, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if player != self.current_player {
            return Err(MoveError::WrongTurn(player));
        }
        self.apply_move(player, Pos::try_new(row, col)?)
    }

    /// Let the random opponent move for the current player.
    pub fn play_ai_move<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<GameState, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let pos = get_random_ai_move(&self.board, rng)?;
        self.play(pos)
    }

    /// Rebuild a game from a move list, validating every move.
    pub fn replay(moves: &[(Pos, Player)]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(GameState::new(), |state, &(pos, player)| {
                state.apply_move(player, pos)
            })
    }

    /// State before the last `count` moves.
    ///
    /// Replays the remaining history from an empty board. Taking back more
    /// moves than were played yields a fresh game.
    pub fn undo(&self, count: usize) -> GameState {
        let keep = self.history.len().saturating_sub(count);
        // Every prefix of a valid history is itself valid.
        Self::replay(&self.history[..keep]).unwrap_or_default()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
