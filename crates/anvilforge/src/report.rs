//! Plain-text rendering of a plan.

use std::fmt;

use anvilforge_core::{CraftingPlan, DeltaResolver};

/// Renders a plan one step per line.
///
/// A `Goal Position: N` header comes first, then the lead-in as recorded under
/// `Optimal action sequence:`. After an `--- End Sequence ---` separator, each
/// end-sequence placeholder is shown with the technique it resolves to, e.g.
/// `LightHit (AnyHit)`. The last line is `Final position: N`.
///
/// # Example
///
/// ```
/// use anvilforge::{Action, CraftingPlan, PlanReport, Technique};
///
/// let plan = CraftingPlan::new(vec![Technique::Shrink.into()], 14, vec![Action::AnyHit]);
/// assert_eq!(
///     PlanReport::new(&plan).to_string(),
///     "Goal Position: 14\n\
///      Optimal action sequence:\n\
///      Shrink\n\
///      --- End Sequence ---\n\
///      LightHit (AnyHit)\n\
///      Final position: 14"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlanReport<'a> {
    plan: &'a CraftingPlan,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a CraftingPlan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Goal Position: {}", self.plan.final_position())?;
        writeln!(f, "Optimal action sequence:")?;
        for action in self.plan.optimal_sequence() {
            writeln!(f, "{}", action)?;
        }
        writeln!(f, "--- End Sequence ---")?;
        for step in DeltaResolver::resolve_sequence(self.plan.end_sequence()) {
            if step.action.is_placeholder() {
                writeln!(f, "{} ({})", step.resolved, step.action)?;
            } else {
                writeln!(f, "{}", step.action)?;
            }
        }
        write!(f, "Final position: {}", self.plan.final_position())
    }
}
