use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::AppConfig;
use connect_four::ui::ConsoleGame;

/// Play Connect Four with two people at one terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player console Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override how many tokens in a row win
    #[arg(long)]
    run_length: Option<usize>,

    /// Override rendered cell width in characters
    #[arg(long)]
    cell_width: Option<usize>,

    /// Override rendered cell height in lines
    #[arg(long)]
    cell_height: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(run_length) = cli.run_length {
        config.board.run_length = run_length;
    }
    if let Some(width) = cli.cell_width {
        config.cell.width = width;
    }
    if let Some(height) = cli.cell_height {
        config.cell.height = height;
    }
    config.validate().context("invalid command line overrides")?;

    let stdin = io::stdin();
    let mut game = ConsoleGame::new(&config, stdin.lock(), io::stdout().lock());
    game.run().context("game aborted")?;

    Ok(())
}
