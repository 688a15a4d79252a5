//! Configuration to acknowledge author preferences as well as set defaults.
//!
//! Specifically, we try to find a markit.toml, and if present we load settings from there.
//! This provides the document file extensions and the length of block-start search prefixes.

use crate::block_starts::DEFAULT_PREFIX_CHARS;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "markit.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from markit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["mit".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = 25)]
    /// Characters of each block kept in the block-start pattern.
    pub pattern_prefix_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["mit".to_string()],
            pattern_prefix_chars: DEFAULT_PREFIX_CHARS,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from markit.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|| {
            warn!(path = %path.display(), "ignoring malformed config file");
            Self::default()
        })
    }

    #[must_use]
    /// Parse TOML configuration text; absent keys take their defaults.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
