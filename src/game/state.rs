use log::info;

use super::board::{DropError, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_RUN_LENGTH};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

impl From<DropError> for MoveError {
    fn from(err: DropError) -> Self {
        match err {
            DropError::InvalidColumn(col) => MoveError::InvalidColumn(col),
            DropError::ColumnFull(col) => MoveError::ColumnFull(col),
        }
    }
}

/// One game session: the board, whose turn it is, and the outcome once
/// decided.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state on the standard 6x7 board
    pub fn initial() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_RUN_LENGTH)
    }

    /// Create initial game state on a `rows x cols` board won by `run_length` in a row
    pub fn new(rows: usize, cols: usize, run_length: usize) -> Self {
        info!("new {rows}x{cols} game, {run_length} in a row wins");
        GameState {
            board: Board::with_run_length(rows, cols, run_length),
            current_player: Player::First, // Player one starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that still accept a token
    pub fn open_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Play one round in place: drop, check the mover for a win, check for
    /// a full board, then hand the turn over.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        self.board.drop_token(column, mover)?;

        if self.board.has_connect_four(mover) {
            info!("player {} wins", mover.number());
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            info!("board filled up, game drawn");
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
