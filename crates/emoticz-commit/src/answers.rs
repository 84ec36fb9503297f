//! Answers collected by the prompt loop.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ChangeType;

/// Names of the answers a commit style asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerField {
    /// The change type.
    Prefix,
    /// The part of the system touched.
    Scope,
    /// The short imperative summary.
    Subject,
    /// Additional context.
    Body,
    /// Whether the commit breaks compatibility.
    IsBreakingChange,
    /// Trailing metadata (issue references, breaking change notes).
    Footer,
}

impl AnswerField {
    /// Returns the answer name as used by the prompt descriptors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Scope => "scope",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::IsBreakingChange => "is_breaking_change",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for AnswerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single answer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// A choice from a selection list.
    Choice(ChangeType),
    /// Free text.
    Text(String),
    /// A yes/no confirmation.
    Flag(bool),
}

impl AnswerValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Choice(_) => "choice",
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
        }
    }
}

/// Errors raised while assembling an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// A required answer was never given.
    #[error("missing answer: {0}")]
    Missing(AnswerField),

    /// An answer had the wrong kind of value.
    #[error("answer {field} expects a {expected} value, got {actual}")]
    Mismatch {
        /// The answer name.
        field: AnswerField,
        /// The expected value kind.
        expected: &'static str,
        /// The value kind received.
        actual: &'static str,
    },
}

/// The answers for one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    /// The change type.
    pub prefix: ChangeType,

    /// The scope (empty when omitted).
    pub scope: String,

    /// The subject line summary.
    pub subject: String,

    /// The body (empty when omitted).
    pub body: String,

    /// Whether this is a breaking change.
    pub is_breaking_change: bool,

    /// The footer (empty when omitted).
    pub footer: String,
}

impl Answers {
    /// Creates a new answer set builder.
    #[must_use]
    pub fn builder(prefix: ChangeType) -> AnswersBuilder {
        AnswersBuilder::new(prefix)
    }

    /// Assembles an answer set from named values, as produced by a prompt loop.
    ///
    /// `prefix`, `scope` and `subject` are required; the other answers default to
    /// empty text and `false`. A later value for the same name replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if a required answer is missing or a value has the wrong kind.
    pub fn from_values(
        values: impl IntoIterator<Item = (AnswerField, AnswerValue)>,
    ) -> Result<Self, AnswerError> {
        let mut prefix = None;
        let mut scope = None;
        let mut subject = None;
        let mut body = String::new();
        let mut is_breaking_change = false;
        let mut footer = String::new();

        for (field, value) in values {
            match (field, value) {
                (AnswerField::Prefix, AnswerValue::Choice(change_type)) => {
                    prefix = Some(change_type);
                }
                (AnswerField::Scope, AnswerValue::Text(text)) => scope = Some(text),
                (AnswerField::Subject, AnswerValue::Text(text)) => subject = Some(text),
                (AnswerField::Body, AnswerValue::Text(text)) => body = text,
                (AnswerField::Footer, AnswerValue::Text(text)) => footer = text,
                (AnswerField::IsBreakingChange, AnswerValue::Flag(flag)) => {
                    is_breaking_change = flag;
                }
                (field, value) => {
                    return Err(AnswerError::Mismatch {
                        field,
                        expected: expected_kind(field),
                        actual: value.kind(),
                    });
                }
            }
        }

        Ok(Self {
            prefix: prefix.ok_or(AnswerError::Missing(AnswerField::Prefix))?,
            scope: scope.ok_or(AnswerError::Missing(AnswerField::Scope))?,
            subject: subject.ok_or(AnswerError::Missing(AnswerField::Subject))?,
            body,
            is_breaking_change,
            footer,
        })
    }
}

fn expected_kind(field: AnswerField) -> &'static str {
    match field {
        AnswerField::Prefix => "choice",
        AnswerField::IsBreakingChange => "flag",
        AnswerField::Scope | AnswerField::Subject | AnswerField::Body | AnswerField::Footer => {
            "text"
        }
    }
}

/// Builder for [`Answers`].
#[derive(Debug)]
pub struct AnswersBuilder {
    prefix: ChangeType,
    scope: String,
    subject: String,
    body: String,
    is_breaking_change: bool,
    footer: String,
}

impl AnswersBuilder {
    fn new(prefix: ChangeType) -> Self {
        Self {
            prefix,
            scope: String::new(),
            subject: String::new(),
            body: String::new(),
            is_breaking_change: false,
            footer: String::new(),
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Sets the subject.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the breaking change flag.
    #[must_use]
    pub fn breaking(mut self, breaking: bool) -> Self {
        self.is_breaking_change = breaking;
        self
    }

    /// Sets the footer.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Builds the [`Answers`].
    #[must_use]
    pub fn build(self) -> Answers {
        Answers {
            prefix: self.prefix,
            scope: self.scope,
            subject: self.subject,
            body: self.body,
            is_breaking_change: self.is_breaking_change,
            footer: self.footer,
        }
    }
}
