//! Console front end: plain-text board rendering, the column prompt, and the
//! turn loop tying them to a game session.

pub mod console;
pub mod prompt;
mod text_board;

pub use console::ConsoleGame;
pub use text_board::TextBoard;
