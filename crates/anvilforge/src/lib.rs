//! AnvilForge - Shortest Anvil Action Sequences in Rust
//!
//! Give a goal position and the steps that must finish the piece; get back the
//! shortest lead-in that gets there.
//!
//! # Example
//!
//! ```rust
//! use anvilforge::prelude::*;
//!
//! let plan = anvilforge::plan(57, &[Action::AnyHit; 3]).unwrap();
//! assert_eq!(plan.final_position, 58);
//!
//! let report = PlanReport::new(&plan).to_string();
//! assert!(report.ends_with("Final position: 58"));
//! ```

// Core types
pub use anvilforge_core::{
    parse_sequence, Action, ActionCatalog, AnvilForgeError, CraftingPlan, DeltaResolver,
    ParseActionError, ResolvedStep, Result, Sequence, Technique,
};

// Configuration
pub use anvilforge_config::{BoundsConfig, ConfigError, PlannerConfig, SearchConfig};

// Planner
pub use anvilforge_solver::{CraftingPlanner, SearchOutcome, SearchStats, TraversalSearch};

#[cfg(feature = "console")]
pub use anvilforge_console as console;

mod report;
pub use report::PlanReport;

/// Plans with the reference bounds and default search guards.
///
/// Shorthand for `CraftingPlanner::default().plan(goal_position, end_sequence)`.
pub fn plan(goal_position: i32, end_sequence: &[Action]) -> Result<CraftingPlan> {
    CraftingPlanner::default().plan(goal_position, end_sequence)
}

pub mod prelude {
    pub use super::{Action, AnvilForgeError, CraftingPlan, CraftingPlanner, PlanReport, Technique};
    pub use super::{PlannerConfig, Sequence};
}
