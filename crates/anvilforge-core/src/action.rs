//! Action types.
//!
//! A [`Technique`] is one of the eight concrete anvil actions with a fixed,
//! non-zero effect on position. An [`Action`] is either a concrete technique
//! or one of the two placeholders that are resolved against the catalog when
//! a sequence is evaluated or searched.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A concrete anvil action with a fixed effect on position.
///
/// Variants are declared in catalog order. That order breaks ties during
/// placeholder resolution and decides which of several equal-length
/// sequences the search returns, so it must not be rearranged.
///
/// # Example
///
/// ```
/// use anvilforge_core::Technique;
///
/// assert_eq!(Technique::Punch.effect(), 2);
/// assert_eq!(Technique::Draw.effect(), -15);
/// assert_eq!(Technique::ALL.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Technique {
    Punch,
    Bend,
    Upset,
    Shrink,
    LightHit,
    MediumHit,
    HeavyHit,
    Draw,
}

impl Technique {
    /// Every concrete technique, in catalog order.
    pub const ALL: [Technique; 8] = [
        Technique::Punch,
        Technique::Bend,
        Technique::Upset,
        Technique::Shrink,
        Technique::LightHit,
        Technique::MediumHit,
        Technique::HeavyHit,
        Technique::Draw,
    ];

    /// The hit subset used to resolve [`Action::AnyHit`], in catalog order.
    pub const HITS: [Technique; 3] = [Technique::LightHit, Technique::MediumHit, Technique::HeavyHit];

    /// Returns the signed change in position this technique applies.
    #[inline]
    pub const fn effect(self) -> i32 {
        match self {
            Technique::Punch => 2,
            Technique::Bend => 7,
            Technique::Upset => 13,
            Technique::Shrink => 16,
            Technique::LightHit => -3,
            Technique::MediumHit => -6,
            Technique::HeavyHit => -9,
            Technique::Draw => -15,
        }
    }

    /// Returns the canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Technique::Punch => "Punch",
            Technique::Bend => "Bend",
            Technique::Upset => "Upset",
            Technique::Shrink => "Shrink",
            Technique::LightHit => "LightHit",
            Technique::MediumHit => "MediumHit",
            Technique::HeavyHit => "HeavyHit",
            Technique::Draw => "Draw",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A step in a sequence: a concrete technique or a placeholder.
///
/// # Example
///
/// ```
/// use anvilforge_core::{Action, Technique};
///
/// let hit: Action = "AnyHit".parse().unwrap();
/// assert_eq!(hit, Action::AnyHit);
/// assert_eq!(hit.effect(), None);
/// assert_eq!(Action::from(Technique::Bend).effect(), Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// A technique with a fixed effect.
    Concrete(Technique),
    /// Resolves to whichever hit technique lands closest to the target.
    AnyHit,
    /// Resolves to whichever technique lands closest to the target.
    Any,
}

impl Action {
    /// Returns the fixed effect, or `None` for placeholders.
    #[inline]
    pub fn effect(self) -> Option<i32> {
        match self {
            Action::Concrete(technique) => Some(technique.effect()),
            Action::AnyHit | Action::Any => None,
        }
    }

    /// Returns true for [`Action::AnyHit`] and [`Action::Any`].
    pub fn is_placeholder(self) -> bool {
        !matches!(self, Action::Concrete(_))
    }

    /// Returns the canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Action::Concrete(technique) => technique.name(),
            Action::AnyHit => "AnyHit",
            Action::Any => "Any",
        }
    }
}

impl From<Technique> for Action {
    fn from(technique: Technique) -> Self {
        Action::Concrete(technique)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an action name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action: {0}")]
pub struct ParseActionError(pub String);

impl FromStr for Technique {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Technique::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseActionError(name.to_string()))
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("AnyHit") {
            Ok(Action::AnyHit)
        } else if name.eq_ignore_ascii_case("Any") {
            Ok(Action::Any)
        } else {
            name.parse().map(Action::Concrete)
        }
    }
}

/// Ordered list of actions, applied first to last.
pub type Sequence = Vec<Action>;

/// Parses a comma or whitespace separated list of action names.
///
/// # Example
///
/// ```
/// use anvilforge_core::{parse_sequence, Action, Technique};
///
/// let seq = parse_sequence("Punch, AnyHit Any").unwrap();
/// assert_eq!(seq, vec![Action::Concrete(Technique::Punch), Action::AnyHit, Action::Any]);
/// ```
pub fn parse_sequence(s: &str) -> Result<Sequence, ParseActionError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_effects() {
        let effects: Vec<i32> = Technique::ALL.iter().map(|t| t.effect()).collect();
        assert_eq!(effects, vec![2, 7, 13, 16, -3, -6, -9, -15]);
    }

    #[test]
    fn test_no_zero_effect() {
        assert!(Technique::ALL.iter().all(|t| t.effect() != 0));
    }

    #[test]
    fn test_hits() {
        assert_eq!(
            Technique::HITS,
            [Technique::LightHit, Technique::MediumHit, Technique::HeavyHit]
        );
        assert!(Technique::HITS.iter().all(|t| t.effect() < 0));
    }

    #[test]
    fn test_parse_round_trip_names() {
        for technique in Technique::ALL {
            let action: Action = technique.name().parse().unwrap();
            assert_eq!(action, Action::Concrete(technique));
            assert_eq!(action.to_string(), technique.name());
        }
        assert_eq!("anyhit".parse::<Action>().unwrap(), Action::AnyHit);
        assert_eq!(" ANY ".parse::<Action>().unwrap(), Action::Any);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Twist".parse::<Action>().unwrap_err();
        assert_eq!(err, ParseActionError("Twist".to_string()));
        assert_eq!(err.to_string(), "Unknown action: Twist");
    }

    #[test]
    fn test_placeholder_accessors() {
        assert!(Action::Any.is_placeholder());
        assert!(Action::AnyHit.is_placeholder());
        assert!(!Action::from(Technique::Upset).is_placeholder());
    }

    #[test]
    fn test_parse_sequence_empty() {
        assert_eq!(parse_sequence("  ").unwrap(), Vec::<Action>::new());
        assert!(parse_sequence("Punch,Nope").is_err());
    }
}
