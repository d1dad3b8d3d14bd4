//! # Connect Four
//!
//! A two-player Connect Four game played at the console.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: gravity board, run detection, game session
//! - [`ui`] — Console front end: text board, column prompt, turn loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
