//! Commit style trait.

use emoticz_commit::{Answers, ChangeType, ParsedCommit};

use super::Plugin;
use crate::{BumpRules, PluginResult, Question};

/// A commit message style consumed by an authoring host.
///
/// The host drives the prompt loop with [`questions`](Self::questions), renders the
/// answers with [`message`](Self::message), and uses the pattern tables to classify
/// commits and decide version bumps.
pub trait CommitStyle: Plugin {
    /// Returns the prompts in the order they should be asked.
    fn questions(&self) -> Vec<Question>;

    /// Renders the commit message for a complete answer set.
    ///
    /// Answers are trusted to have passed the question filters.
    fn message(&self, answers: &Answers) -> String;

    /// Returns an example commit message.
    fn example(&self) -> String;

    /// Returns the message schema in template form.
    fn schema(&self) -> String;

    /// Returns a regex matching the message schema.
    fn schema_pattern(&self) -> &str;

    /// Returns true if the message follows the schema.
    fn is_valid_message(&self, message: &str) -> bool;

    /// Returns long-form help about the style.
    ///
    /// # Errors
    ///
    /// Returns an error if the help resource is missing or unreadable.
    fn info(&self) -> PluginResult<String>;

    /// Returns the bump rule table.
    ///
    /// With `major_version_zero`, breaking changes bump the minor version instead.
    fn bump_rules(&self, major_version_zero: bool) -> &BumpRules;

    /// Returns a regex matching messages that belong in a changelog.
    fn changelog_pattern(&self) -> &str;

    /// Returns true if the message belongs in a changelog.
    fn in_changelog(&self, message: &str) -> bool;

    /// Parses a message written in this style.
    ///
    /// Returns `None` if the message doesn't follow the style.
    fn parse_commit(&self, message: &str) -> Option<ParsedCommit>;

    /// Returns the changelog section title for a change type, if it has one.
    fn change_type_title(&self, change_type: ChangeType) -> Option<String>;

    /// Returns the changelog section a message would be filed under.
    fn changelog_section(&self, message: &str) -> Option<String> {
        if !self.in_changelog(message) {
            return None;
        }
        let parsed = self.parse_commit(message)?;
        self.change_type_title(parsed.change_type)
    }
}
