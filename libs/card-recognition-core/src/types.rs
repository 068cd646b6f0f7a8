//! Core types for card recognition.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum similarity for a fragment to be accepted as a player name.
pub const DEFAULT_PLAYER_THRESHOLD: f64 = 0.6;

/// Minimum similarity for a fragment to be accepted as a team name.
pub const DEFAULT_TEAM_THRESHOLD: f64 = 0.7;

/// Minimum similarity for a fragment to be accepted as a team abbreviation.
pub const DEFAULT_ABBREVIATION_THRESHOLD: f64 = 0.8;

/// One known card in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub player_name: String,
    pub team_name: String,
}

impl CatalogEntry {
    pub fn new(player_name: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            team_name: team_name.into(),
        }
    }
}

/// Outcome of a recognition attempt.
///
/// An empty `player_name`/`team_name` and a `None` card mean nothing cleared
/// its threshold. `confidence` is the similarity of the accepted match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub player_name: String,
    pub team_name: String,
    pub confidence: f64,
    pub matched_card: Option<CatalogEntry>,
}

impl MatchResult {
    /// Whether a catalog card was identified.
    pub fn is_match(&self) -> bool {
        self.matched_card.is_some()
    }
}

/// Acceptance thresholds used by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub player_threshold: f64,
    pub team_threshold: f64,
    pub abbreviation_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            player_threshold: DEFAULT_PLAYER_THRESHOLD,
            team_threshold: DEFAULT_TEAM_THRESHOLD,
            abbreviation_threshold: DEFAULT_ABBREVIATION_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    /// Check that every threshold lies within `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("player_threshold", self.player_threshold),
            ("team_threshold", self.team_threshold),
            ("abbreviation_threshold", self.abbreviation_threshold),
        ];

        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}
