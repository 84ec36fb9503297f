//! Ordered bump rule tables.

use regex::Regex;
use tracing::debug;

use crate::BumpType;

/// A single `(pattern, severity)` pair.
#[derive(Debug, Clone)]
pub struct BumpRule {
    pattern: Regex,
    bump: BumpType,
}

impl BumpRule {
    /// Creates a rule from a regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn new(pattern: &str, bump: BumpType) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            bump,
        })
    }

    /// Returns the rule's pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the severity this rule yields.
    #[must_use]
    pub fn bump(&self) -> BumpType {
        self.bump
    }

    /// Returns true if this rule matches the marker.
    #[must_use]
    pub fn matches(&self, marker: &str) -> bool {
        self.pattern.is_match(marker)
    }
}

/// Maps a commit message to the version bump it implies.
///
/// The marker pattern extracts the leading type marker (e.g., `fix[cli]!`) from the
/// first line of a message. The rules are then tried top to bottom against that
/// marker and the first match decides; later rules are never consulted.
#[derive(Debug, Clone)]
pub struct BumpRules {
    marker: Regex,
    rules: Vec<BumpRule>,
}

impl BumpRules {
    /// Creates a rule table.
    ///
    /// If the marker pattern has a capture group named `marker`, only that group is
    /// handed to the rules; otherwise the whole match is.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid regex.
    pub fn new(marker_pattern: &str, rules: &[(&str, BumpType)]) -> Result<Self, regex::Error> {
        let marker = Regex::new(marker_pattern)?;
        let rules = rules
            .iter()
            .map(|&(pattern, bump)| BumpRule::new(pattern, bump))
            .collect::<Result<_, _>>()?;
        Ok(Self { marker, rules })
    }

    /// Returns the marker pattern.
    #[must_use]
    pub fn marker_pattern(&self) -> &str {
        self.marker.as_str()
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[BumpRule] {
        &self.rules
    }

    /// Extracts the leading type marker from a message.
    #[must_use]
    pub fn marker<'a>(&self, message: &'a str) -> Option<&'a str> {
        let first_line = message.lines().next().unwrap_or("");
        let captures = self.marker.captures(first_line)?;
        let found = captures.name("marker").or_else(|| captures.get(0))?;
        Some(found.as_str())
    }

    /// Resolves a marker against the rules, first match wins.
    #[must_use]
    pub fn resolve_marker(&self, marker: &str) -> Option<BumpType> {
        self.rules
            .iter()
            .find(|rule| rule.matches(marker))
            .map(BumpRule::bump)
    }

    /// Resolves the bump implied by a whole commit message.
    ///
    /// Returns `None` when the message has no recognizable marker or no rule matches.
    #[must_use]
    pub fn resolve(&self, message: &str) -> Option<BumpType> {
        let marker = self.marker(message)?;
        let bump = self.resolve_marker(marker);
        debug!(marker, ?bump, "resolved bump rule");
        bump
    }
}
