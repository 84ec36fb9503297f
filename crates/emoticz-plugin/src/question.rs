//! Prompt descriptors.

use emoticz_commit::{AnswerField, ChangeType};

use crate::ValidationError;

/// Normalizes a raw text answer, or rejects it.
pub type Filter = fn(&str) -> Result<String, ValidationError>;

/// One entry of a selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The value recorded when this entry is picked.
    pub value: ChangeType,
    /// The text shown to the user.
    pub name: String,
    /// The shortcut key.
    pub key: char,
}

/// What kind of answer a question expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one entry from a list.
    List {
        /// The entries, in display order.
        choices: Vec<Choice>,
    },
    /// Free text.
    Input,
    /// Yes or no.
    Confirm {
        /// The answer used when the user just presses enter.
        default: bool,
    },
}

impl QuestionKind {
    /// Returns the host-facing type name (`list`, `input` or `confirm`).
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Input => "input",
            Self::Confirm { .. } => "confirm",
        }
    }
}

/// A single prompt the host shows to the user.
#[derive(Debug, Clone)]
pub struct Question {
    /// The answer this question fills.
    pub name: AnswerField,
    /// The prompt text.
    pub message: String,
    /// The expected answer kind.
    pub kind: QuestionKind,
    /// Optional normalization applied to text answers.
    pub filter: Option<Filter>,
}

impl Question {
    /// Creates a selection list question.
    #[must_use]
    pub fn list(name: AnswerField, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self::new(name, message, QuestionKind::List { choices })
    }

    /// Creates a free text question.
    #[must_use]
    pub fn input(name: AnswerField, message: impl Into<String>) -> Self {
        Self::new(name, message, QuestionKind::Input)
    }

    /// Creates a yes/no question.
    #[must_use]
    pub fn confirm(name: AnswerField, message: impl Into<String>, default: bool) -> Self {
        Self::new(name, message, QuestionKind::Confirm { default })
    }

    fn new(name: AnswerField, message: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            name,
            message: message.into(),
            kind,
            filter: None,
        }
    }

    /// Attaches a normalization filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Runs the filter on a raw text answer, passing it through when there is none.
    ///
    /// # Errors
    ///
    /// Returns the filter's [`ValidationError`] if it rejects the answer.
    pub fn apply_filter(&self, raw: &str) -> Result<String, ValidationError> {
        match self.filter {
            Some(filter) => filter(raw),
            None => Ok(raw.to_string()),
        }
    }

    /// Finds the choice matching a shortcut key, a 1-based position, or a value.
    #[must_use]
    pub fn find_choice(&self, selection: &str) -> Option<&Choice> {
        let QuestionKind::List { choices } = &self.kind else {
            return None;
        };
        let selection = selection.trim();

        let mut chars = selection.chars();
        if let (Some(key), None) = (chars.next(), chars.next())
            && let Some(choice) = choices.iter().find(|c| c.key == key)
        {
            return Some(choice);
        }

        if let Ok(position) = selection.parse::<usize>() {
            return position.checked_sub(1).and_then(|i| choices.get(i));
        }

        let value = ChangeType::from_prefix(selection)?;
        choices.iter().find(|c| c.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(text: &str) -> Result<String, ValidationError> {
        Ok(text.to_uppercase())
    }

    fn reject(_: &str) -> Result<String, ValidationError> {
        Err(ValidationError::new("nope"))
    }

    fn type_question() -> Question {
        let choices = [ChangeType::Fix, ChangeType::Feat]
            .into_iter()
            .map(|t| Choice {
                value: t,
                name: t.code().to_string(),
                key: t.key(),
            })
            .collect();
        Question::list(AnswerField::Prefix, "pick", choices)
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_question().kind.type_name(), "list");
        assert_eq!(
            Question::input(AnswerField::Scope, "s").kind.type_name(),
            "input"
        );
        assert_eq!(
            Question::confirm(AnswerField::IsBreakingChange, "b", false)
                .kind
                .type_name(),
            "confirm"
        );
    }

    #[test]
    fn test_apply_filter_without_filter() {
        let question = Question::input(AnswerField::Footer, "footer");
        assert_eq!(question.apply_filter(" raw ").unwrap(), " raw ");
    }

    #[test]
    fn test_apply_filter() {
        let question = Question::input(AnswerField::Scope, "scope").with_filter(upper);
        assert_eq!(question.apply_filter("cli").unwrap(), "CLI");
    }

    #[test]
    fn test_apply_filter_rejects() {
        let question = Question::input(AnswerField::Scope, "scope").with_filter(reject);
        assert_eq!(question.apply_filter("cli").unwrap_err().message(), "nope");
    }

    #[test]
    fn test_find_choice_by_key() {
        let question = type_question();
        assert_eq!(question.find_choice("f").unwrap().value, ChangeType::Feat);
    }

    #[test]
    fn test_find_choice_by_position() {
        let question = type_question();
        assert_eq!(question.find_choice("1").unwrap().value, ChangeType::Fix);
        assert!(question.find_choice("0").is_none());
        assert!(question.find_choice("3").is_none());
    }

    #[test]
    fn test_find_choice_by_value() {
        let question = type_question();
        assert_eq!(question.find_choice("feat").unwrap().value, ChangeType::Feat);
        assert_eq!(
            question.find_choice(" 🪲 fix ").unwrap().value,
            ChangeType::Fix
        );
    }

    #[test]
    fn test_find_choice_not_offered() {
        let question = type_question();
        assert!(question.find_choice("docs").is_none());
        assert!(question.find_choice("q").is_none());
    }

    #[test]
    fn test_find_choice_on_input_question() {
        let question = Question::input(AnswerField::Scope, "scope");
        assert!(question.find_choice("1").is_none());
    }
}
