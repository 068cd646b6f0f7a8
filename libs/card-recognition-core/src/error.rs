//! Error types for card-recognition-core.
//!
//! Recognition itself never fails; these cover loading catalogs and
//! configuration from the outside world.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while parsing a catalog file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing '|' separator at line {line}")]
    MissingSeparator { line: usize },

    #[error("missing player name at line {line}")]
    MissingPlayer { line: usize },

    #[error("missing team name at line {line}")]
    MissingTeam { line: usize },

    #[error("too many '|' separators at line {line}")]
    TooManySeparators { line: usize },
}

/// Errors in matcher configuration or abbreviation tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("threshold {name} must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("invalid abbreviation table: {0}")]
    InvalidAbbreviations(#[from] serde_json::Error),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
