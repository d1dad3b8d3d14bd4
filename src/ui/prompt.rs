use std::io::{BufRead, Write};

use log::debug;

use crate::error::PlayError;
use crate::game::Board;

/// Parse a 1-based column number typed by a player into a 0-based index.
pub fn parse_column(text: &str, cols: usize) -> Option<usize> {
    let number: usize = text.trim().parse().ok()?;
    (1..=cols).contains(&number).then(|| number - 1)
}

/// Ask until the player names a column that still has room.
///
/// Returns the 0-based column. End of input is an error.
pub fn read_column<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
) -> Result<usize, PlayError> {
    let cols = board.cols();
    write!(output, "Please select an empty space between 1 and {cols}: ")?;

    loop {
        output.flush()?;

        // Raw bytes: a line that is not UTF-8 is bad input, not a broken stream
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PlayError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);

        match parse_column(&line, cols) {
            Some(col) if board.is_column_full(col) => {
                debug!("column {col} is full, asking again");
                write!(output, "This column is marked. Please choose another one: ")?;
            }
            Some(col) => return Ok(col),
            None => {
                debug!("unusable column input {:?}", line.trim());
                write!(output, "Please enter a number between 1 and {cols}: ")?;
            }
        }
    }
}
