//! Error types for AnvilForge

use thiserror::Error;

/// Main error type for AnvilForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnvilForgeError {
    /// The goal, corrected for the end sequence, lies outside the anvil bounds.
    #[error("Invalid goal position or end sequence: pre-end position {pre_end_position} is outside [{min}, {max}]")]
    InvalidGoal {
        pre_end_position: i32,
        min: i32,
        max: i32,
    },

    /// No sequence that never moves away from zero covers the displacement.
    #[error("Displacement {displacement} cannot be covered without moving away from zero")]
    Unreachable { displacement: i32 },

    /// The depth limit cut the search before any sequence was found.
    #[error("No sequence for displacement {displacement} within {depth_limit} steps")]
    DepthLimitExceeded { displacement: i32, depth_limit: usize },

    /// The search expanded its configured node budget without finishing.
    #[error("Search aborted after expanding {nodes} nodes")]
    SearchLimitExceeded { nodes: u64 },

    /// Error in planner configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for AnvilForge operations
pub type Result<T> = std::result::Result<T, AnvilForgeError>;
