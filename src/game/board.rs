use log::debug;

use super::lines;
use super::player::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    First,
    Second,
}

/// Why a drop was refused. The board is untouched in both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// A `rows x cols` grid filled under gravity.
///
/// Row 0 is the top, row `rows - 1` the bottom. Dimensions and the winning
/// run length are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    run_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create an empty board of the given size, won by four in a row
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self::with_run_length(rows, cols, DEFAULT_RUN_LENGTH)
    }

    /// Create an empty board of the given size and winning run length
    pub fn with_run_length(rows: usize, cols: usize, run_length: usize) -> Self {
        Board {
            rows,
            cols,
            run_length,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Get the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get how many tokens in a row win
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Get the cell at a specific position
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// One row, left to right
    ///
    /// Panics if `row` is outside the board.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// One column, top to bottom
    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.rows).map(|row| self.get(row, col)).collect()
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// The row a token dropped into `col` would land on
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, col: usize, player: Player) -> Result<usize, DropError> {
        if col >= self.cols {
            debug!("rejected drop by player {}: column {col} out of range", player.number());
            return Err(DropError::InvalidColumn(col));
        }

        let Some(row) = self.lowest_empty_row(col) else {
            debug!("rejected drop by player {}: column {col} is full", player.number());
            return Err(DropError::ColumnFull(col));
        };

        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        debug!("player {} dropped into column {col}, landed on row {row}", player.number());
        Ok(row)
    }

    /// Check if the board is completely full.
    ///
    /// Only the top row is inspected: under gravity a full top row means
    /// every column is full.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .take(self.cols)
            .all(|&cell| cell != Cell::Empty)
    }

    /// Check if no token has been dropped yet
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    /// Whether `player` owns a run of at least `run_length` cells along any
    /// row, column or diagonal.
    pub fn has_connect_four(&self, player: Player) -> bool {
        let target = player.to_cell();
        let len = self.run_length;

        lines::rows(self).any(|line| lines::contains_run(line, target, len))
            || lines::columns(self).any(|line| lines::contains_run(&line, target, len))
            || lines::diagonals(self, len)
                .iter()
                .any(|line| lines::contains_run(line, target, len))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
