//! Card recognition library shared by the collection backend.
//!
//! Provides:
//! - Levenshtein-based string similarity
//! - Team abbreviation table
//! - Card catalog snapshots and a plain-text catalog format
//! - `CardMatcher`, which maps noisy text fragments to a catalog card

pub mod abbreviations;
pub mod catalog;
pub mod error;
pub mod matcher;
pub mod matching;
pub mod parser;
pub mod types;

pub use abbreviations::AbbreviationTable;
pub use catalog::Catalog;
pub use error::{ConfigError, CoreError, ParseError, Result};
pub use matcher::CardMatcher;
pub use matching::{levenshtein_distance, normalize, similarity};
pub use parser::{format_catalog, load_catalog_file, parse_catalog};
pub use types::{
    CatalogEntry, MatchResult, MatcherConfig, DEFAULT_ABBREVIATION_THRESHOLD,
    DEFAULT_PLAYER_THRESHOLD, DEFAULT_TEAM_THRESHOLD,
};
