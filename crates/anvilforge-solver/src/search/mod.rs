//! Shortest-sequence traversal search using branch-and-bound.
//!
//! The search explores action choices depth first, in catalog order, and
//! keeps the first sequence of each strictly shorter length it finds. A
//! branch is only taken when it does not move further from zero, so
//! `|remaining|` never grows along a path.
//!
//! # Pruning
//!
//! - **Length**: a path as long as the current best cannot improve on it.
//! - **Depth limit**: a path is abandoned when even the largest step repeated
//!   cannot close the gap within `depth_limit` steps. This holds before any
//!   solution is known, so a displacement beyond `depth_limit * 16` fails at
//!   the root.
//! - **Lower bound**: with `enable_pruning`, a path is abandoned when even
//!   the largest step repeated cannot close the gap in fewer steps than the
//!   current best. The bound is admissible, so the result does not change.

use anvilforge_config::SearchConfig;
use anvilforge_core::{Action, ActionCatalog, AnvilForgeError, DeltaResolver, Result, Sequence};
use tracing::{debug, info, trace};

use crate::stats::SearchStats;

#[cfg(test)]
mod tests;

/// The result of a successful search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The shortest sequence found. Empty for a zero displacement.
    pub sequence: Sequence,
    /// Counters collected during the search.
    pub stats: SearchStats,
}

/// Depth-first branch-and-bound search for a minimum-length sequence.
///
/// # Example
///
/// ```
/// use anvilforge_config::SearchConfig;
/// use anvilforge_core::{Action, Technique};
/// use anvilforge_solver::TraversalSearch;
///
/// let search = TraversalSearch::new(SearchConfig::default());
/// let outcome = search.search(9).unwrap();
/// assert_eq!(
///     outcome.sequence,
///     vec![Action::Concrete(Technique::Punch), Action::Concrete(Technique::Bend)]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraversalSearch {
    config: SearchConfig,
}

impl TraversalSearch {
    /// Creates a new search with the given guards.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the search guards.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds a minimum-length sequence whose effects sum to `displacement`.
    ///
    /// # Errors
    ///
    /// - [`AnvilForgeError::Unreachable`] when no sequence that never moves
    ///   away from zero covers the displacement exactly.
    /// - [`AnvilForgeError::DepthLimitExceeded`] when no solution was found
    ///   and some branch was cut by the depth limit.
    /// - [`AnvilForgeError::SearchLimitExceeded`] when the node limit is hit.
    pub fn search(&self, displacement: i32) -> Result<SearchOutcome> {
        let mut context = SearchContext::new(&self.config);
        context.stats.start();

        info!(
            event = "search_start",
            displacement = displacement,
            depth_limit = ?self.config.depth_limit,
            node_limit = ?self.config.node_limit,
        );

        context.explore(displacement)?;

        let SearchContext {
            best,
            stats,
            depth_cutoff,
            ..
        } = context;

        info!(
            event = "search_end",
            displacement = displacement,
            nodes = stats.nodes_expanded,
            improvements = stats.improvements,
            pruned = stats.pruned,
            duration_ms = stats.elapsed().as_millis() as u64,
            speed = stats.nodes_per_second() as u64,
            length = ?best.as_ref().map(Vec::len),
        );

        match (best, self.config.depth_limit) {
            (Some(sequence), _) => Ok(SearchOutcome { sequence, stats }),
            (None, Some(depth_limit)) if depth_cutoff => {
                Err(AnvilForgeError::DepthLimitExceeded {
                    displacement,
                    depth_limit,
                })
            }
            (None, _) => Err(AnvilForgeError::Unreachable { displacement }),
        }
    }
}

// Search-scoped state; nothing here outlives a single `search` call.
struct SearchContext<'a> {
    config: &'a SearchConfig,
    max_step: u32,
    path: Sequence,
    best: Option<Sequence>,
    best_len: usize,
    depth_cutoff: bool,
    stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            max_step: ActionCatalog::max_step(),
            path: Vec::new(),
            best: None,
            best_len: usize::MAX,
            depth_cutoff: false,
            stats: SearchStats::default(),
        }
    }

    fn explore(&mut self, remaining: i32) -> Result<()> {
        if let Some(limit) = self.config.node_limit {
            if self.stats.nodes_expanded >= limit {
                return Err(AnvilForgeError::SearchLimitExceeded {
                    nodes: self.stats.nodes_expanded,
                });
            }
        }
        self.stats.record_node();

        let depth = self.path.len();
        if remaining == 0 && depth < self.best_len {
            self.best_len = depth;
            self.best = Some(self.path.clone());
            self.stats.record_improvement();
            debug!(
                event = "improved",
                length = depth as u64,
                nodes = self.stats.nodes_expanded,
            );
            return Ok(());
        }

        if depth >= self.best_len {
            return Ok(());
        }

        let lower_bound = remaining.unsigned_abs().div_ceil(self.max_step) as usize;

        if let Some(limit) = self.config.depth_limit {
            if depth.saturating_add(lower_bound) > limit {
                trace!(event = "depth_limit", remaining = remaining, depth = depth as u64);
                self.depth_cutoff = true;
                self.stats.record_prune();
                return Ok(());
            }
        }

        if self.config.enable_pruning {
            if depth.saturating_add(lower_bound) >= self.best_len {
                self.stats.record_prune();
                return Ok(());
            }
        }

        for &action in ActionCatalog::search_actions() {
            match action {
                Action::AnyHit => {
                    // Records the resolved hit, not the placeholder.
                    let hit = DeltaResolver::resolve_best_hit(remaining);
                    self.branch(remaining, hit.effect(), Action::Concrete(hit))?;
                }
                Action::Any => {
                    // Records the placeholder; the technique used is not kept.
                    for technique in ActionCatalog::all_concrete_actions() {
                        self.branch(remaining, technique.effect(), Action::Any)?;
                    }
                }
                Action::Concrete(technique) => {
                    self.branch(remaining, technique.effect(), action)?;
                }
            }
        }

        Ok(())
    }

    fn branch(&mut self, remaining: i32, effect: i32, recorded: Action) -> Result<()> {
        let Some(next) = remaining.checked_sub(effect) else {
            return Ok(());
        };
        if next.unsigned_abs() > remaining.unsigned_abs() {
            return Ok(());
        }

        self.path.push(recorded);
        let result = self.explore(next);
        self.path.pop();
        result
    }
}
