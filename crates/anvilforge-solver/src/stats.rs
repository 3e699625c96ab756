//! Search statistics.
//!
//! Stack-allocated counters for a single traversal search.

use std::time::{Duration, Instant};

/// Counters collected while a traversal search runs.
///
/// # Example
///
/// ```
/// use anvilforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node();
/// stats.record_node();
/// stats.record_improvement();
///
/// assert_eq!(stats.nodes_expanded, 2);
/// assert_eq!(stats.improvements, 1);
/// assert_eq!(stats.pruned, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Nodes entered by the search, including the root.
    pub nodes_expanded: u64,
    /// Times a strictly shorter sequence replaced the best one.
    pub improvements: u64,
    /// Branches cut by the depth limit or the lower bound.
    pub pruned: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    #[inline]
    pub fn record_node(&mut self) {
        self.nodes_expanded += 1;
    }

    #[inline]
    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    #[inline]
    pub fn record_prune(&mut self) {
        self.pruned += 1;
    }

    /// Returns the node expansion rate.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_expanded as f64 / secs
        } else {
            0.0
        }
    }
}
