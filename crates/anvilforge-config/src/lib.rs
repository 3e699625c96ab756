//! Configuration system for AnvilForge.
//!
//! Load planner configuration from TOML or YAML to control the anvil bounds
//! and the search guards without code changes. Every field has a default, so
//! partial files are valid and an empty file yields the reference planner.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use anvilforge_config::PlannerConfig;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     [bounds]
//!     max_position = 120
//!
//!     [search]
//!     depth_limit = 40
//!     node_limit = 1000000
//! "#).unwrap();
//!
//! assert_eq!(config.bounds.min_position, 1);
//! assert_eq!(config.bounds.max_position, 120);
//! assert_eq!(config.search.depth_limit, Some(40));
//! assert!(config.search.enable_pruning);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use anvilforge_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("anvil.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default lowest anvil position.
pub const DEFAULT_MIN_POSITION: i32 = 1;

/// Default highest anvil position.
pub const DEFAULT_MAX_POSITION: i32 = 150;

/// Default correction added to the caller's goal.
pub const DEFAULT_GOAL_OFFSET: i32 = 1;

/// Default maximum path length explored by the search.
pub const DEFAULT_DEPTH_LIMIT: usize = 128;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Anvil position bounds.
    #[serde(default)]
    pub bounds: BoundsConfig,

    /// Search guards.
    #[serde(default)]
    pub search: SearchConfig,
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`PlannerConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the anvil bounds.
    pub fn with_bounds(mut self, min_position: i32, max_position: i32) -> Self {
        self.bounds.min_position = min_position;
        self.bounds.max_position = max_position;
        self
    }

    /// Sets the search depth limit.
    pub fn with_depth_limit(mut self, depth_limit: Option<usize>) -> Self {
        self.search.depth_limit = depth_limit;
        self
    }

    /// Sets the search node limit.
    pub fn with_node_limit(mut self, node_limit: Option<u64>) -> Self {
        self.search.node_limit = node_limit;
        self
    }

    /// Enables or disables lower-bound pruning.
    pub fn with_pruning(mut self, enable_pruning: bool) -> Self {
        self.search.enable_pruning = enable_pruning;
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        self.search.validate()
    }
}

/// Anvil position bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BoundsConfig {
    /// Lowest valid position; the search always starts here.
    pub min_position: i32,

    /// Highest valid position.
    pub max_position: i32,

    /// Added to the caller's goal before planning.
    pub goal_offset: i32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min_position: DEFAULT_MIN_POSITION,
            max_position: DEFAULT_MAX_POSITION,
            goal_offset: DEFAULT_GOAL_OFFSET,
        }
    }
}

impl BoundsConfig {
    /// Returns true if `position` lies within `[min_position, max_position]`.
    pub fn contains(&self, position: i32) -> bool {
        (self.min_position..=self.max_position).contains(&position)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_position > self.max_position {
            return Err(ConfigError::Invalid(format!(
                "min_position {} exceeds max_position {}",
                self.min_position, self.max_position
            )));
        }
        if self.max_position.checked_sub(self.min_position).is_none() {
            return Err(ConfigError::Invalid(format!(
                "position span [{}, {}] does not fit in i32",
                self.min_position, self.max_position
            )));
        }
        Ok(())
    }
}

/// Guards for the traversal search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum path length to explore (None = unlimited).
    pub depth_limit: Option<usize>,

    /// Maximum number of nodes to expand (None = unlimited).
    pub node_limit: Option<u64>,

    /// Whether to prune branches by the remaining-distance lower bound.
    pub enable_pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: Some(DEFAULT_DEPTH_LIMIT),
            node_limit: None,
            enable_pruning: true,
        }
    }
}

impl SearchConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.node_limit == Some(0) {
            return Err(ConfigError::Invalid("node_limit must be positive".into()));
        }
        Ok(())
    }
}
