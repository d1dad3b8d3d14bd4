use std::io::{BufRead, Write};

use log::debug;

use super::prompt;
use super::text_board::TextBoard;
use crate::config::AppConfig;
use crate::error::PlayError;
use crate::game::{Cell, GameOutcome, GameState};

/// Two people sharing one terminal: show the board, read a column, play it,
/// until somebody connects or the board fills up.
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    state: GameState,
    renderer: TextBoard,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(config: &AppConfig, input: R, output: W) -> Self {
        ConsoleGame {
            input,
            output,
            state: GameState::new(
                config.board.rows,
                config.board.columns,
                config.board.run_length,
            ),
            renderer: TextBoard::new(config.cell.clone(), config.markers.clone()),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Main game loop
    pub fn run(&mut self) -> Result<GameOutcome, PlayError> {
        if let Some(outcome) = self.state.outcome() {
            return Ok(outcome);
        }

        writeln!(
            self.output,
            "Player 1 will be {}. Player 2 will be {}.",
            self.renderer.marker(Cell::First),
            self.renderer.marker(Cell::Second),
        )?;

        loop {
            self.show_board()?;

            let column = prompt::read_column(&mut self.input, &mut self.output, self.state.board())?;
            let mover = self.state.current_player();
            if let Err(err) = self.state.apply_move_mut(column) {
                // The prompt only hands out open columns
                debug!("move by player {} refused: {err}", mover.number());
                continue;
            }

            match self.state.outcome() {
                Some(GameOutcome::Winner(player)) => {
                    writeln!(self.output, "The player {} wins.", player.number())?;
                    self.show_board()?;
                    return Ok(GameOutcome::Winner(player));
                }
                Some(GameOutcome::Draw) => {
                    writeln!(self.output, "Nobody wins. The board is filled up.")?;
                    return Ok(GameOutcome::Draw);
                }
                None => {}
            }
        }
    }

    fn show_board(&mut self) -> Result<(), PlayError> {
        let text = self.renderer.render(self.state.board());
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use std::io::Cursor;

    fn play(config: &AppConfig, moves: &str) -> (Result<GameOutcome, PlayError>, String) {
        let mut game = ConsoleGame::new(config, Cursor::new(moves.to_string()), Vec::new());
        let result = game.run();
        let text = String::from_utf8(game.output().clone()).unwrap();
        (result, text)
    }

    #[test]
    fn test_vertical_win_announced() {
        let (result, text) = play(&AppConfig::default(), "1\n2\n1\n2\n1\n2\n1\n");

        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::First));
        assert!(text.starts_with("Player 1 will be X. Player 2 will be O.\n"));
        assert!(text.contains("The player 1 wins.\n"));
        // board is shown again after the announcement
        let after = text.split("The player 1 wins.\n").nth(1).unwrap();
        assert!(after.contains("|  X |  O |"));
    }

    #[test]
    fn test_draw_on_small_board() {
        let mut config = AppConfig::default();
        config.board.rows = 2;
        config.board.columns = 3;
        config.board.run_length = 3;

        // third "1" hits a full column and is asked again
        let (result, text) = play(&config, "1\n1\n1\n2\n3\n2\n3\n");

        assert_eq!(result.unwrap(), GameOutcome::Draw);
        assert!(text.contains("This column is marked. Please choose another one: "));
        assert!(text.ends_with("Nobody wins. The board is filled up.\n"));
    }

    #[test]
    fn test_custom_markers_in_greeting() {
        let mut config = AppConfig::default();
        config.markers.first = "R".into();
        config.markers.second = "Y".into();

        let (_, text) = play(&config, "");
        assert!(text.starts_with("Player 1 will be R. Player 2 will be Y.\n"));
    }

    #[test]
    fn test_input_closed_mid_game() {
        let (result, _) = play(&AppConfig::default(), "1\n2\n");
        assert!(matches!(result, Err(PlayError::InputClosed)));
    }

    #[test]
    fn test_state_tracks_moves() {
        let config = AppConfig::default();
        let mut game = ConsoleGame::new(&config, Cursor::new("4\n"), Vec::new());
        assert!(game.run().is_err());
        assert_eq!(game.state().board().get(5, 3), Cell::First);
        assert_eq!(game.state().current_player(), Player::Second);
    }
}
