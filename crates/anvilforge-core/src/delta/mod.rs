//! Delta evaluation for sequences that may contain placeholders.
//!
//! Placeholders are resolved greedily, left to right: each one sees only the
//! running sum of the steps before it, never the steps after it.

use crate::action::{Action, Technique};
use crate::catalog::ActionCatalog;


/// One step of a sequence together with the technique it applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedStep {
    /// The step as written in the sequence.
    pub action: Action,
    /// The concrete technique applied for this step.
    pub resolved: Technique,
    /// Running delta after this step.
    pub running_delta: i32,
}

/// Resolves placeholders and computes net position changes.
///
/// # Example
///
/// ```
/// use anvilforge_core::{Action, DeltaResolver, Technique};
///
/// assert_eq!(DeltaResolver::resolve_best_hit(0), Technique::LightHit);
/// assert_eq!(DeltaResolver::cumulative_delta(&[Action::AnyHit; 3]), -9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaResolver;

impl DeltaResolver {
    /// Returns the hit technique whose effect is closest to `remaining`.
    ///
    /// Ties keep the earliest technique in catalog order.
    pub fn resolve_best_hit(remaining: i32) -> Technique {
        closest(ActionCatalog::hit_actions(), remaining)
    }

    /// Returns the concrete technique whose effect is closest to `remaining`.
    ///
    /// Ties keep the earliest technique in catalog order.
    pub fn resolve_best_any(remaining: i32) -> Technique {
        closest(ActionCatalog::all_concrete_actions(), remaining)
    }

    /// Resolves a single action given the running delta accumulated so far.
    pub fn resolve_step(action: Action, running_delta: i32) -> Technique {
        match action {
            Action::Concrete(technique) => technique,
            Action::AnyHit => Self::resolve_best_hit(-running_delta),
            Action::Any => Self::resolve_best_any(-running_delta),
        }
    }

    /// Returns the net position change produced by `sequence`.
    pub fn cumulative_delta(sequence: &[Action]) -> i32 {
        sequence.iter().fold(0, |sum, &action| {
            sum + Self::resolve_step(action, sum).effect()
        })
    }

    /// Resolves every step of `sequence` to the technique it applies.
    ///
    /// The last `running_delta` equals [`DeltaResolver::cumulative_delta`].
    pub fn resolve_sequence(sequence: &[Action]) -> Vec<ResolvedStep> {
        let mut sum = 0;
        sequence
            .iter()
            .map(|&action| {
                let resolved = Self::resolve_step(action, sum);
                sum += resolved.effect();
                ResolvedStep {
                    action,
                    resolved,
                    running_delta: sum,
                }
            })
            .collect()
    }
}

// First minimal element wins: strict `<` keeps the earlier candidate on ties.
fn closest<const N: usize>(candidates: &[Technique; N], target: i32) -> Technique {
    candidates[1..].iter().fold(candidates[0], |best, &current| {
        if (current.effect() - target).abs() < (best.effect() - target).abs() {
            current
        } else {
            best
        }
    })
}
