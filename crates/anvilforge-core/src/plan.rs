//! Planner output.

use crate::action::{Action, Sequence};

/// The result of a planning request.
///
/// `optimal_sequence` is the searched lead-in; `end_sequence` echoes the
/// caller's mandatory trailing steps unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftingPlan {
    pub optimal_sequence: Sequence,
    pub final_position: i32,
    pub end_sequence: Sequence,
}

impl CraftingPlan {
    pub fn new(optimal_sequence: Sequence, final_position: i32, end_sequence: Sequence) -> Self {
        Self {
            optimal_sequence,
            final_position,
            end_sequence,
        }
    }

    #[inline]
    pub fn optimal_sequence(&self) -> &[Action] {
        &self.optimal_sequence
    }

    #[inline]
    pub fn end_sequence(&self) -> &[Action] {
        &self.end_sequence
    }

    #[inline]
    pub fn final_position(&self) -> i32 {
        self.final_position
    }

    /// Total number of steps, lead-in plus end sequence.
    pub fn len(&self) -> usize {
        self.optimal_sequence.len() + self.end_sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the lead-in followed by the end sequence.
    pub fn full_sequence(&self) -> Sequence {
        self.optimal_sequence
            .iter()
            .chain(&self.end_sequence)
            .copied()
            .collect()
    }
}
