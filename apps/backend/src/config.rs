//! Service configuration read from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use card_recognition_core::MatcherConfig;

use crate::error::{ApiError, Result};

/// Default cap on fragments accepted by one recognize request.
pub const DEFAULT_MAX_FRAGMENTS: usize = 64;

/// Default cap on the length of one fragment, in characters.
pub const DEFAULT_MAX_FRAGMENT_CHARS: usize = 256;

/// Size limits on a recognize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizeLimits {
    pub max_fragments: usize,
    pub max_fragment_chars: usize,
}

impl Default for RecognizeLimits {
    fn default() -> Self {
        Self {
            max_fragments: DEFAULT_MAX_FRAGMENTS,
            max_fragment_chars: DEFAULT_MAX_FRAGMENT_CHARS,
        }
    }
}

/// Runtime configuration for the backend.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub abbreviations_path: Option<PathBuf>,
    pub matcher: MatcherConfig,
    pub max_fragments: usize,
    pub max_fragment_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            catalog_path: None,
            abbreviations_path: None,
            matcher: MatcherConfig::default(),
            max_fragments: DEFAULT_MAX_FRAGMENTS,
            max_fragment_chars: DEFAULT_MAX_FRAGMENT_CHARS,
        }
    }
}

impl AppConfig {
    /// Load from the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let matcher = MatcherConfig {
            player_threshold: parse_or(&var, "MATCH_PLAYER_THRESHOLD", defaults.matcher.player_threshold)?,
            team_threshold: parse_or(&var, "MATCH_TEAM_THRESHOLD", defaults.matcher.team_threshold)?,
            abbreviation_threshold: parse_or(
                &var,
                "MATCH_ABBREVIATION_THRESHOLD",
                defaults.matcher.abbreviation_threshold,
            )?,
        };
        matcher
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port: parse_or(&var, "PORT", defaults.port)?,
            database_url: var("DATABASE_URL"),
            catalog_path: var("CATALOG_PATH").map(PathBuf::from),
            abbreviations_path: var("ABBREVIATIONS_PATH").map(PathBuf::from),
            matcher,
            max_fragments: parse_or(&var, "MAX_FRAGMENTS", defaults.max_fragments)?,
            max_fragment_chars: parse_or(
                &var,
                "MAX_FRAGMENT_CHARS",
                defaults.max_fragment_chars,
            )?,
        })
    }

    /// Request limits for the recognize endpoint.
    pub fn limits(&self) -> RecognizeLimits {
        RecognizeLimits {
            max_fragments: self.max_fragments,
            max_fragment_chars: self.max_fragment_chars,
        }
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(var: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ApiError::Config(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.database_url.is_none());
        assert!(config.catalog_path.is_none());
        assert_eq!(config.matcher, MatcherConfig::default());
        assert_eq!(config.max_fragments, DEFAULT_MAX_FRAGMENTS);
        assert_eq!(config.limits(), RecognizeLimits::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CATALOG_PATH", "/data/catalog.txt"),
            ("MATCH_PLAYER_THRESHOLD", "0.75"),
            ("MAX_FRAGMENTS", "10"),
            ("MAX_FRAGMENT_CHARS", "40"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/catalog.txt")));
        assert_eq!(config.matcher.player_threshold, 0.75);
        assert_eq!(config.matcher.team_threshold, 0.7);
        assert_eq!(config.max_fragments, 10);
        assert_eq!(
            config.limits(),
            RecognizeLimits {
                max_fragments: 10,
                max_fragment_chars: 40,
            }
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "  "), ("PORT", "")])).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let result = AppConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ApiError::Config(msg)) if msg.contains("PORT")));
    }

    #[test]
    fn test_threshold_out_of_range_is_config_error() {
        let result = AppConfig::from_lookup(lookup(&[("MATCH_TEAM_THRESHOLD", "1.2")]));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
