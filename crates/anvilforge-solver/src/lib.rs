//! AnvilForge Solver Engine
//!
//! This crate provides the planning implementation:
//! - `TraversalSearch`, a depth-first branch-and-bound shortest-sequence search
//! - `CraftingPlanner`, which checks bounds, accounts for the end sequence,
//!   and runs the search for the remaining displacement
//! - Search statistics

pub mod planner;
pub mod search;
pub mod stats;

pub use planner::CraftingPlanner;
pub use search::{SearchOutcome, TraversalSearch};
pub use stats::SearchStats;
