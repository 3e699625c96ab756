//! The fixed action catalog.
//!
//! The catalog is a process-wide constant. Its iteration order is part of the
//! observable behavior: placeholder resolution keeps the first of several
//! equally close techniques, and the search returns the first of several
//! equally short sequences it meets in this order.

use crate::action::{Action, Technique};

/// Concrete actions followed by the two placeholders, in branching order.
const SEARCH_ACTIONS: [Action; 10] = [
    Action::Concrete(Technique::Punch),
    Action::Concrete(Technique::Bend),
    Action::Concrete(Technique::Upset),
    Action::Concrete(Technique::Shrink),
    Action::Concrete(Technique::LightHit),
    Action::Concrete(Technique::MediumHit),
    Action::Concrete(Technique::HeavyHit),
    Action::Concrete(Technique::Draw),
    Action::AnyHit,
    Action::Any,
];

/// Read-only view of the action catalog.
///
/// # Example
///
/// ```
/// use anvilforge_core::{ActionCatalog, Technique};
///
/// assert_eq!(ActionCatalog::hit_actions(), &Technique::HITS);
/// assert_eq!(ActionCatalog::max_step(), 16);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionCatalog;

impl ActionCatalog {
    /// Every concrete technique, in catalog order.
    #[inline]
    pub fn all_concrete_actions() -> &'static [Technique; 8] {
        &Technique::ALL
    }

    /// The hit subset, in catalog order.
    #[inline]
    pub fn hit_actions() -> &'static [Technique; 3] {
        &Technique::HITS
    }

    /// Concrete actions then `AnyHit` then `Any`; the order the search branches in.
    #[inline]
    pub fn search_actions() -> &'static [Action] {
        &SEARCH_ACTIONS
    }

    /// Largest absolute effect of any concrete technique.
    pub fn max_step() -> u32 {
        Technique::ALL
            .iter()
            .map(|t| t.effect().unsigned_abs())
            .max()
            .unwrap_or(1)
    }
}
