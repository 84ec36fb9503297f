//! Parsed commit type produced by a commit style's parser.

use serde::{Deserialize, Serialize};

use crate::ChangeType;

/// A composed commit message parsed back into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The change type.
    pub change_type: ChangeType,

    /// The optional scope.
    pub scope: Option<String>,

    /// Whether this is a breaking change.
    pub breaking: bool,

    /// The subject line summary.
    pub subject: String,

    /// The optional body.
    pub body: Option<String>,

    /// The optional footer, without its surrounding parentheses.
    pub footer: Option<String>,
}

impl ParsedCommit {
    /// Creates a new parsed commit builder.
    #[must_use]
    pub fn builder(change_type: ChangeType, subject: impl Into<String>) -> ParsedCommitBuilder {
        ParsedCommitBuilder::new(change_type, subject)
    }
}

/// Builder for [`ParsedCommit`].
#[derive(Debug)]
pub struct ParsedCommitBuilder {
    change_type: ChangeType,
    scope: Option<String>,
    breaking: bool,
    subject: String,
    body: Option<String>,
    footer: Option<String>,
}

impl ParsedCommitBuilder {
    fn new(change_type: ChangeType, subject: impl Into<String>) -> Self {
        Self {
            change_type,
            scope: None,
            breaking: false,
            subject: subject.into(),
            body: None,
            footer: None,
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the breaking flag.
    #[must_use]
    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the footer.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Builds the [`ParsedCommit`].
    #[must_use]
    pub fn build(self) -> ParsedCommit {
        ParsedCommit {
            change_type: self.change_type,
            scope: self.scope,
            breaking: self.breaking,
            subject: self.subject,
            body: self.body,
            footer: self.footer,
        }
    }
}
