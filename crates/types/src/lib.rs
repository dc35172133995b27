//! Core types module - shared configuration and constants
//!
//! This module defines the plain data shared by the placement engine and the
//! search agents. Nothing here knows about boards or pieces; it only describes
//! how a run is configured.
//!
//! # Board Dimensions
//!
//! The board has a configurable width and an unbounded height. Each row is a
//! `u64` bit field, which caps the width:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 11 | Columns when no width is configured |
//! | `MAX_BOARD_WIDTH` | 64 | Widest board a row bit field can hold |
//! | `DEFAULT_BUFFER` | 1 | Pieces the agent may hold back |
//!
//! # Search Budget
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MAX_NODES` | 2000 | Nodes visited before every branch turns terminal |
//! | `DEFAULT_CUTOFF_DEPTH` | 3 | Actions per variation before the branch stops |
//! | `DEFAULT_GOAL_HEIGHT` | 0 | Board height the search tries to return to |
//!
//! # Examples
//!
//! ```
//! use trix_types::{AgentKind, Configuration};
//!
//! let config = Configuration::from_json_str(r#"{"width": 10, "agent": "search"}"#).unwrap();
//! assert_eq!(config.width, 10);
//! assert_eq!(config.buffer, 1);
//! assert_eq!(config.agent, AgentKind::Search);
//! assert!(config.validate().is_ok());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Board width used when nothing else is configured
pub const DEFAULT_WIDTH: usize = 11;

/// Widest supported board (one `u64` per row)
pub const MAX_BOARD_WIDTH: usize = 64;

/// Buffer capacity used when nothing else is configured
pub const DEFAULT_BUFFER: usize = 1;

/// Largest piece edge in cells; bounds masks to a byte and clears to four rows
pub const MAX_PIECE_SIZE: usize = 4;

/// Default node budget for one search
pub const DEFAULT_MAX_NODES: usize = 2000;

/// Default action budget for one variation
pub const DEFAULT_CUTOFF_DEPTH: usize = 3;

/// Default target height for the search goal test
pub const DEFAULT_GOAL_HEIGHT: usize = 0;

/// Which agent drives the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// One-ply greedy placement by referee score
    #[default]
    #[serde(alias = "greedy")]
    Default,
    /// Best-first search over placement sequences
    Search,
}

impl AgentKind {
    /// Parse agent kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use trix_types::AgentKind;
    ///
    /// assert_eq!(AgentKind::from_str("search"), Some(AgentKind::Search));
    /// assert_eq!(AgentKind::from_str("Default"), Some(AgentKind::Default));
    /// assert_eq!(AgentKind::from_str("greedy"), Some(AgentKind::Default));
    /// assert_eq!(AgentKind::from_str("minimax"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" | "greedy" => Some(AgentKind::Default),
            "search" => Some(AgentKind::Search),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Default => "default",
            AgentKind::Search => "search",
        }
    }
}

/// Budget and goal for one search invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Visited-node budget shared by the whole search tree
    pub max_nodes: usize,
    /// Action count at which a branch stops expanding
    pub cutoff_depth: usize,
    /// Board height that counts as success
    pub goal_height: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            cutoff_depth: DEFAULT_CUTOFF_DEPTH,
            goal_height: DEFAULT_GOAL_HEIGHT,
        }
    }
}

/// Weights applied by the referee to each board feature
///
/// Lower scores are better, so rewards carry negative weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefereeWeights {
    pub valleys: f64,
    pub holes: f64,
    pub cleared: f64,
    pub maximum_height: f64,
}

impl Default for RefereeWeights {
    fn default() -> Self {
        Self {
            valleys: -0.5,
            holes: 2.0,
            cleared: -2.5,
            maximum_height: 2.0,
        }
    }
}

/// Run configuration, shared read-only by every environment fork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Board width in columns
    pub width: usize,
    /// Maximum number of held pieces
    pub buffer: usize,
    /// Piece stream to read
    pub input_file: Option<PathBuf>,
    /// Replay log to write
    pub output_file: Option<PathBuf>,
    /// Agent that drives the run
    pub agent: AgentKind,
    pub search: SearchSettings,
    pub weights: RefereeWeights,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            buffer: DEFAULT_BUFFER,
            input_file: None,
            output_file: None,
            agent: AgentKind::Default,
            search: SearchSettings::default(),
            weights: RefereeWeights::default(),
        }
    }
}

impl Configuration {
    /// Parse a JSON configuration; missing keys keep their defaults
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check the values the board model depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > MAX_BOARD_WIDTH {
            return Err(ConfigError::InvalidWidth { width: self.width });
        }
        Ok(())
    }
}

/// Configuration loading and validation failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board width {width} is outside 1..={max}", max = MAX_BOARD_WIDTH)]
    InvalidWidth { width: usize },
    #[error("could not read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_reference_setup() {
        let config = Configuration::default();
        assert_eq!(config.width, 11);
        assert_eq!(config.buffer, 1);
        assert_eq!(config.agent, AgentKind::Default);
        assert_eq!(config.input_file, None);
        assert_eq!(config.output_file, None);
        assert_eq!(config.search.goal_height, 0);
    }

    #[test]
    fn test_default_weights() {
        let weights = RefereeWeights::default();
        assert_eq!(weights.valleys, -0.5);
        assert_eq!(weights.holes, 2.0);
        assert_eq!(weights.cleared, -2.5);
        assert_eq!(weights.maximum_height, 2.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            Configuration::from_json_str(r#"{"buffer": 3, "search": {"max_nodes": 10}}"#).unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.buffer, 3);
        assert_eq!(config.search.max_nodes, 10);
        assert_eq!(config.search.cutoff_depth, DEFAULT_CUTOFF_DEPTH);
    }

    #[test]
    fn test_greedy_alias_deserializes_to_default_agent() {
        let config = Configuration::from_json_str(r#"{"agent": "greedy"}"#).unwrap();
        assert_eq!(config.agent, AgentKind::Default);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Configuration::from_json_str("{width: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_width_bounds_are_validated() {
        let mut config = Configuration::default();
        config.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWidth { width: 0 })
        ));
        config.width = MAX_BOARD_WIDTH + 1;
        assert!(config.validate().is_err());
        config.width = MAX_BOARD_WIDTH;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Configuration::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
