//! Crafting planner: the single entry point for callers.
//!
//! Logging levels:
//! - **INFO**: Plan start/end with positions and sequence length
//! - **WARN**: Goals rejected as out of bounds
//! - **DEBUG**: Improvements found by the search

use anvilforge_config::{BoundsConfig, PlannerConfig};
use anvilforge_core::{Action, AnvilForgeError, CraftingPlan, DeltaResolver, Result};
use tracing::{info, warn};

use crate::search::TraversalSearch;
use crate::stats::SearchStats;

/// Plans the shortest lead-in that, followed by a mandatory end sequence,
/// lands on a goal position.
///
/// Pure: the same inputs always produce the same plan.
///
/// # Example
///
/// ```
/// use anvilforge_core::{Action, Technique};
/// use anvilforge_solver::CraftingPlanner;
///
/// let planner = CraftingPlanner::default();
/// let plan = planner.plan(57, &[Action::AnyHit; 3]).unwrap();
///
/// assert_eq!(plan.final_position, 58);
/// assert_eq!(plan.optimal_sequence.len(), 5);
/// assert_eq!(plan.optimal_sequence[0], Action::Concrete(Technique::Punch));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CraftingPlanner {
    bounds: BoundsConfig,
    search: TraversalSearch,
}

impl CraftingPlanner {
    /// Creates a planner from an already validated configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            bounds: config.bounds,
            search: TraversalSearch::new(config.search),
        }
    }

    /// Creates a planner, validating the configuration first.
    pub fn try_new(config: PlannerConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AnvilForgeError::Config(e.to_string()))?;
        Ok(Self::new(config))
    }

    /// Returns the position bounds.
    pub fn bounds(&self) -> &BoundsConfig {
        &self.bounds
    }

    /// Returns the underlying search.
    pub fn search(&self) -> &TraversalSearch {
        &self.search
    }

    /// Plans a lead-in for `goal_position` ending with `end_sequence`.
    ///
    /// # Errors
    ///
    /// - [`AnvilForgeError::InvalidGoal`] when the position before the end
    ///   sequence falls outside the bounds, or lies too far above
    ///   `min_position` to express as a displacement.
    /// - Search errors from [`TraversalSearch::search`].
    pub fn plan(&self, goal_position: i32, end_sequence: &[Action]) -> Result<CraftingPlan> {
        self.plan_with_stats(goal_position, end_sequence)
            .map(|(plan, _)| plan)
    }

    /// Like [`CraftingPlanner::plan`], also returning the search counters.
    pub fn plan_with_stats(
        &self,
        goal_position: i32,
        end_sequence: &[Action],
    ) -> Result<(CraftingPlan, SearchStats)> {
        let adjusted_goal = goal_position.saturating_add(self.bounds.goal_offset);
        let end_delta = DeltaResolver::cumulative_delta(end_sequence);
        let pre_end_position = adjusted_goal.saturating_sub(end_delta);

        info!(
            event = "plan_start",
            goal_position = goal_position,
            end_steps = end_sequence.len() as u64,
            end_delta = end_delta,
            pre_end_position = pre_end_position,
        );

        let displacement = pre_end_position
            .checked_sub(self.bounds.min_position)
            .filter(|_| self.bounds.contains(pre_end_position));
        let Some(displacement) = displacement else {
            warn!(
                event = "invalid_goal",
                pre_end_position = pre_end_position,
                min = self.bounds.min_position,
                max = self.bounds.max_position,
            );
            return Err(AnvilForgeError::InvalidGoal {
                pre_end_position,
                min: self.bounds.min_position,
                max: self.bounds.max_position,
            });
        };
        let outcome = self.search.search(displacement)?;

        info!(
            event = "plan_end",
            final_position = adjusted_goal,
            steps = outcome.sequence.len() as u64,
            nodes = outcome.stats.nodes_expanded,
        );

        let plan = CraftingPlan::new(outcome.sequence, adjusted_goal, end_sequence.to_vec());
        Ok((plan, outcome.stats))
    }
}
