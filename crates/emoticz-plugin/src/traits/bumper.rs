//! Bump strategy trait.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Plugin;

/// Semantic-version component a set of commits asks to increment.
///
/// Variants are ordered by severity, so `max` picks the strongest bump.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    /// No version bump needed.
    #[default]
    None,
    /// Patch version bump (bug fixes, refactors, performance).
    Patch,
    /// Minor version bump (new features).
    Minor,
    /// Major version bump (breaking changes).
    Major,
}

impl BumpType {
    /// Returns true if this bump changes the version at all.
    #[must_use]
    pub fn is_bump(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Determines the version bump implied by a set of commit messages.
pub trait BumpStrategy: Plugin {
    /// Determines the bump type based on the given commit messages.
    fn determine(&self, messages: &[String]) -> BumpType;
}
