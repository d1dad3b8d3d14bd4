use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_RUN_LENGTH};

/// Largest accepted board side, in rows or columns.
pub const MAX_BOARD_SIDE: usize = 64;
/// Largest accepted rendered cell side, in characters or lines.
pub const MAX_CELL_SIDE: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub cell: CellConfig,
    pub markers: MarkerConfig,
}

/// Board geometry and win condition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    pub run_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLS,
            run_length: DEFAULT_RUN_LENGTH,
        }
    }
}

/// Size of one rendered cell: `width` characters across, `height` lines tall.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CellConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for CellConfig {
    fn default() -> Self {
        CellConfig {
            width: 4,
            height: 1,
        }
    }
}

/// Glyphs drawn for each player's tokens.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub first: String,
    pub second: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            first: "X".into(),
            second: "O".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation(
                "board.columns must be > 0".into(),
            ));
        }
        if self.board.rows > MAX_BOARD_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.rows must be <= {MAX_BOARD_SIDE}"
            )));
        }
        if self.board.columns > MAX_BOARD_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.columns must be <= {MAX_BOARD_SIDE}"
            )));
        }
        if self.board.run_length < 2 {
            return Err(ConfigError::Validation(
                "board.run_length must be >= 2".into(),
            ));
        }

        if self.cell.width == 0 {
            return Err(ConfigError::Validation("cell.width must be > 0".into()));
        }
        if self.cell.height == 0 {
            return Err(ConfigError::Validation("cell.height must be > 0".into()));
        }
        if self.cell.width > MAX_CELL_SIDE {
            return Err(ConfigError::Validation(format!(
                "cell.width must be <= {MAX_CELL_SIDE}"
            )));
        }
        if self.cell.height > MAX_CELL_SIDE {
            return Err(ConfigError::Validation(format!(
                "cell.height must be <= {MAX_CELL_SIDE}"
            )));
        }

        for (name, marker) in [
            ("markers.first", &self.markers.first),
            ("markers.second", &self.markers.second),
        ] {
            if marker.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{name} must not be blank"
                )));
            }
            if marker.chars().count() > self.cell.width {
                return Err(ConfigError::Validation(format!(
                    "{name} must fit in cell.width ({})",
                    self.cell.width
                )));
            }
        }
        if self.markers.first == self.markers.second {
            return Err(ConfigError::Validation(
                "markers.first and markers.second must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
