//! AnvilForge Core - Action catalog and delta evaluation
//!
//! This crate provides the fixed building blocks of anvil planning:
//! - The concrete techniques and the two placeholder actions
//! - The ordered action catalog
//! - Placeholder resolution and cumulative delta evaluation
//! - The plan and error types shared by the planner and its callers

pub mod action;
pub mod catalog;
pub mod delta;
pub mod error;
pub mod plan;

pub use action::{parse_sequence, Action, ParseActionError, Sequence, Technique};
pub use catalog::ActionCatalog;
pub use delta::{DeltaResolver, ResolvedStep};
pub use error::{AnvilForgeError, Result};
pub use plan::CraftingPlan;
