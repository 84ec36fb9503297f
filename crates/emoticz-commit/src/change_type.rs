//! Change types and how they are rendered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a change type is rendered at the head of a commit message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixStyle {
    /// Emoticon followed by the type code (e.g., `🪲 fix`).
    #[default]
    Emoticon,
    /// Type code only (e.g., `fix`).
    Plain,
}

impl fmt::Display for PrefixStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emoticon => write!(f, "emoticon"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// The category a commit is classified under.
///
/// Variants are declared in the order they are offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// A bug fix.
    Fix,
    /// A new feature.
    Feat,
    /// Documentation only changes.
    Docs,
    /// Formatting changes with no functional effect.
    Style,
    /// Code changes that neither fix a bug nor add a feature.
    Refactor,
    /// Performance improvements.
    Perf,
    /// Added or corrected tests.
    Test,
    /// Build system or external dependency changes.
    Build,
    /// Continuous integration changes.
    Ci,
    /// Routine maintenance.
    Chore,
    /// Reverts a previous commit.
    Revert,
}

impl ChangeType {
    /// All change types, in prompt order.
    pub const ALL: [Self; 11] = [
        Self::Fix,
        Self::Feat,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Build,
        Self::Ci,
        Self::Chore,
        Self::Revert,
    ];

    /// Returns the type code (e.g., `feat`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::Feat => "feat",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Revert => "revert",
        }
    }

    /// Returns the emoticon tagging this type.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Fix => "🪲",
            Self::Feat => "✨",
            Self::Docs => "📝",
            Self::Style => "🎨",
            Self::Refactor => "\u{267b}\u{fe0f}",
            Self::Perf => "⚡",
            Self::Test => "🧪",
            Self::Build => "📦",
            Self::Ci => "🚀",
            Self::Chore => "🔧",
            Self::Revert => "⏪",
        }
    }

    /// Returns the single-character shortcut used in the type selection list.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Fix => 'x',
            Self::Feat => 'f',
            Self::Docs => 'd',
            Self::Style => 's',
            Self::Refactor => 'r',
            Self::Perf => 'p',
            Self::Test => 't',
            Self::Build => 'b',
            Self::Ci => 'c',
            Self::Chore => 'h',
            Self::Revert => 'z',
        }
    }

    /// Returns a one-sentence description of when to use this type.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Fix => "A bug fix. Correlates with PATCH in SemVer.",
            Self::Feat => "A new feature. Correlates with MINOR in SemVer.",
            Self::Docs => "Documentation only changes.",
            Self::Style => {
                "Changes that improve readability or formatting without affecting behavior \
                 (white-space, formatting, missing semi-colons, etc)."
            }
            Self::Refactor => {
                "A code change that neither fixes a bug nor adds a feature, but improves the code."
            }
            Self::Perf => "A code change that improves performance.",
            Self::Test => "Adding missing tests or correcting existing tests.",
            Self::Build => {
                "Changes that affect the build system or external dependencies \
                 (example: pip, docker, npm)."
            }
            Self::Ci => {
                "Changes to continuous integration configuration files and scripts \
                 (example: .gitlab-ci.yml)."
            }
            Self::Chore => {
                "Routine tasks not tied to a feature or a bug \
                 (example: add .gitignore, install a dependency, first commit)."
            }
            Self::Revert => {
                "Reverts a previous commit. The hash of the reverted commit should be referenced."
            }
        }
    }

    /// Renders the message prefix for this type.
    #[must_use]
    pub fn prefix(self, style: PrefixStyle) -> String {
        match style {
            PrefixStyle::Emoticon => format!("{} {}", self.emoji(), self.code()),
            PrefixStyle::Plain => self.code().to_string(),
        }
    }

    /// Renders the display label shown in the type selection list.
    #[must_use]
    pub fn label(self, style: PrefixStyle) -> String {
        format!("{}: {}", self.prefix(style), self.description())
    }

    /// Returns the changelog section title for this type.
    ///
    /// Only types that affect the version have a section.
    #[must_use]
    pub fn changelog_title(self, style: PrefixStyle) -> Option<String> {
        let title = match self {
            Self::Feat => "Feat",
            Self::Fix => "Fix",
            Self::Refactor => "Refactor",
            Self::Perf => "Perf",
            _ => return None,
        };

        Some(match style {
            PrefixStyle::Emoticon => format!("{} {title}", self.emoji()),
            PrefixStyle::Plain => title.to_string(),
        })
    }

    /// Looks up a type by its shortcut key.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Looks up a type from a rendered prefix in either style.
    ///
    /// A missing variation selector on the emoticon is tolerated.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let prefix = prefix.trim();
        if let Ok(change_type) = prefix.parse() {
            return Some(change_type);
        }

        let (emoji, code) = prefix.split_once(' ')?;
        let change_type: Self = code.trim_start().parse().ok()?;
        let strip = |s: &str| s.trim_end_matches('\u{fe0f}').to_string();
        (strip(emoji) == strip(change_type.emoji())).then_some(change_type)
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string names no change type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown change type: {0}")]
pub struct UnknownChangeType(pub String);

impl FromStr for ChangeType {
    type Err = UnknownChangeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownChangeType(s.to_string()))
    }
}
