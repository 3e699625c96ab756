//! Shared test fixtures for AnvilForge crates.
//!
//! This crate provides reference inputs and a brute-force oracle for testing.
//! It does NOT depend on `anvilforge-solver` so the solver can use it as a
//! dev-dependency.
//!
//! - [`oracle`] - Breadth-first shortest sequence lengths
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! anvilforge-test = { workspace = true }
//! ```

pub mod oracle;

use anvilforge_core::{Action, Sequence, Technique};

/// Goal position of the reference request.
pub const REFERENCE_GOAL: i32 = 57;

/// End sequence of the reference request: three `AnyHit` placeholders.
pub const REFERENCE_END_SEQUENCE: [Action; 3] = [Action::AnyHit, Action::AnyHit, Action::AnyHit];

/// Wraps each technique as a concrete action.
pub fn techniques(techniques: &[Technique]) -> Sequence {
    techniques.iter().copied().map(Action::Concrete).collect()
}
