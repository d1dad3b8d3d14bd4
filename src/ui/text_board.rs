use crate::config::{CellConfig, MarkerConfig};
use crate::game::{Board, Cell};

/// Draws a board as plain text.
///
/// Every board row is framed by `_` separator lines and its cells are split
/// by `|`. A cell is `width` characters wide and `height` lines tall, with
/// the marker on the middle line. A footer numbers the columns from 1.
#[derive(Debug, Clone)]
pub struct TextBoard {
    cell: CellConfig,
    markers: MarkerConfig,
}

impl TextBoard {
    pub fn new(cell: CellConfig, markers: MarkerConfig) -> Self {
        TextBoard { cell, markers }
    }

    pub fn render(&self, board: &Board) -> String {
        let separator = "_".repeat(board.cols() * (self.cell.width + 1) + 1);
        let marker_line = self.cell.height / 2;
        let mut out = String::new();

        for row in 0..board.rows() {
            out.push_str(&separator);
            out.push('\n');

            for line in 0..self.cell.height {
                out.push('|');
                for &cell in board.row(row) {
                    let text = if line == marker_line { self.marker(cell) } else { "" };
                    out.push_str(&self.pad(text));
                    out.push('|');
                }
                out.push('\n');
            }
        }

        out.push_str(&separator);
        out.push('\n');
        out.push_str(&self.footer(board.cols()));
        out.push('\n');
        out
    }

    /// Glyph drawn for a cell; empty cells draw nothing
    pub fn marker(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => "",
            Cell::First => self.markers.first.as_str(),
            Cell::Second => self.markers.second.as_str(),
        }
    }

    fn footer(&self, cols: usize) -> String {
        let mut line = String::from(" ");
        for col in 1..=cols {
            line.push_str(&self.pad(&col.to_string()));
            line.push(' ');
        }
        line.trim_end().to_string()
    }

    /// Fit `text` into one cell width, leaning right of centre
    fn pad(&self, text: &str) -> String {
        let width = self.cell.width;
        let len = text.chars().count();
        let left = (width.saturating_sub(len) + 1) / 2;
        let right = width.saturating_sub(len + left);
        format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
    }
}

impl Default for TextBoard {
    fn default() -> Self {
        Self::new(CellConfig::default(), MarkerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_render_small_board() {
        let mut board = Board::with_size(2, 2);
        board.drop_token(0, Player::First).unwrap();

        let renderer = TextBoard::new(
            CellConfig { width: 3, height: 1 },
            MarkerConfig::default(),
        );
        let expected = "\
_________
|   |   |
_________
| X |   |
_________
  1   2
";
        assert_eq!(renderer.render(&board), expected);
    }

    #[test]
    fn test_default_cell_matches_classic_layout() {
        let mut board = Board::new();
        board.drop_token(6, Player::Second).unwrap();

        let text = TextBoard::default().render(&board);
        let lines: Vec<&str> = text.lines().collect();

        // 6 rows x (separator + 1 line) + closing separator + footer
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "_".repeat(36));
        assert_eq!(lines[11], "|    |    |    |    |    |    |  O |");
        assert_eq!(lines[13], "   1    2    3    4    5    6    7");
    }

    #[test]
    fn test_tall_cells_put_marker_on_middle_line() {
        let mut board = Board::with_size(1, 1);
        board.drop_token(0, Player::First).unwrap();

        let renderer = TextBoard::new(
            CellConfig { width: 1, height: 3 },
            MarkerConfig::default(),
        );
        assert_eq!(renderer.render(&board), "___\n| |\n|X|\n| |\n___\n 1\n");
    }

    #[test]
    fn test_custom_markers() {
        let renderer = TextBoard::new(
            CellConfig::default(),
            MarkerConfig {
                first: "R".into(),
                second: "Y".into(),
            },
        );
        assert_eq!(renderer.marker(Cell::First), "R");
        assert_eq!(renderer.marker(Cell::Second), "Y");
        assert_eq!(renderer.marker(Cell::Empty), "");
    }

    #[test]
    fn test_wide_labels_are_not_truncated() {
        let board = Board::with_size(1, 10);
        let renderer = TextBoard::new(
            CellConfig { width: 1, height: 1 },
            MarkerConfig::default(),
        );
        let text = renderer.render(&board);
        assert!(text.ends_with(" 1 2 3 4 5 6 7 8 9 10\n"));
    }
}
