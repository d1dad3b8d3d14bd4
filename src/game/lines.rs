//! Line extraction for win detection.
//!
//! A winning run can only lie along a row, a column, or one of the two
//! diagonal orientations. These helpers pull each of those lines out of a
//! [`Board`] as plain cell sequences so the run check stays a single loop.

use super::board::{Board, Cell};

/// Every row of the board, top to bottom.
pub fn rows(board: &Board) -> impl Iterator<Item = &[Cell]> + '_ {
    (0..board.rows()).map(move |row| board.row(row))
}

/// Every column of the board, left to right, each read top to bottom.
pub fn columns(board: &Board) -> impl Iterator<Item = Vec<Cell>> + '_ {
    (0..board.cols()).map(move |col| board.column(col))
}

/// All diagonals in both orientations holding at least `min_len` cells.
///
/// The `/` diagonals are the cells sharing a constant `row + col`; the `\`
/// diagonals are the same extraction over the column-mirrored grid.
pub fn diagonals(board: &Board, min_len: usize) -> Vec<Vec<Cell>> {
    let mut all = side_diagonals(board, false, min_len);
    all.extend(side_diagonals(board, true, min_len));
    all
}

/// Diagonals of constant `row + k` where `k` walks the columns left to right,
/// or right to left when `mirrored`. A `rows x cols` grid has
/// `rows + cols - 1` of them; shorter ones than `min_len` are dropped.
fn side_diagonals(board: &Board, mirrored: bool, min_len: usize) -> Vec<Vec<Cell>> {
    let (rows, cols) = (board.rows(), board.cols());

    (0..(rows + cols).saturating_sub(1))
        .map(|sum| {
            (0..=sum)
                .filter(|&k| k < cols && sum - k < rows)
                .map(|k| {
                    let col = if mirrored { cols - 1 - k } else { k };
                    board.get(sum - k, col)
                })
                .collect::<Vec<_>>()
        })
        .filter(|diagonal| diagonal.len() >= min_len)
        .collect()
}

/// Whether `line` holds `run_length` consecutive cells equal to `target`.
///
/// Any other cell, including `Empty`, resets the count. `Empty` itself never
/// forms a run.
pub fn contains_run(line: &[Cell], target: Cell, run_length: usize) -> bool {
    if target == Cell::Empty || run_length == 0 {
        return false;
    }

    let mut count = 0;
    for &cell in line {
        if cell == target {
            count += 1;
            if count >= run_length {
                return true;
            }
        } else {
            count = 0;
        }
    }

    false
}
