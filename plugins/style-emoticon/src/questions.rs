//! Prompt descriptors for the emoticon style.

use emoticz_commit::{AnswerField, ChangeType, PrefixStyle};
use emoticz_plugin::{Choice, Question};

use crate::validators::{parse_body, parse_scope, parse_subject};

/// Builds the prompts in the order they are asked.
pub(crate) fn questions(style: PrefixStyle) -> Vec<Question> {
    let choices = ChangeType::ALL
        .into_iter()
        .map(|change_type| Choice {
            value: change_type,
            name: change_type.label(style),
            key: change_type.key(),
        })
        .collect();

    vec![
        Question::list(
            AnswerField::Prefix,
            "Select the type of change you are committing",
            choices,
        ),
        Question::input(
            AnswerField::Scope,
            "🚩 What is the scope of this change? (class or file name, required)\n",
        )
        .with_filter(parse_scope),
        Question::input(
            AnswerField::Subject,
            "\u{270f}\u{fe0f} Write a short and imperative summary of the code changes: \
             (lower case and no period)\n",
        )
        .with_filter(parse_subject),
        Question::input(
            AnswerField::Body,
            "📄 Provide additional contextual information about the code changes: \
             (press [enter] to skip, use '|' to break lines)\n",
        )
        .with_filter(parse_body),
        Question::confirm(
            AnswerField::IsBreakingChange,
            "🚨 Is this a BREAKING CHANGE? Correlates with MAJOR in SemVer",
            false,
        ),
        Question::input(
            AnswerField::Footer,
            "💬 Footer. Information about breaking changes and the issues this commit closes: \
             (press [enter] to skip)\n",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoticz_plugin::QuestionKind;

    #[test]
    fn test_question_order() {
        let names: Vec<_> = questions(PrefixStyle::Emoticon)
            .iter()
            .map(|q| q.name)
            .collect();
        assert_eq!(
            names,
            [
                AnswerField::Prefix,
                AnswerField::Scope,
                AnswerField::Subject,
                AnswerField::Body,
                AnswerField::IsBreakingChange,
                AnswerField::Footer,
            ]
        );
    }

    #[test]
    fn test_question_types() {
        let types: Vec<_> = questions(PrefixStyle::Plain)
            .iter()
            .map(|q| q.kind.type_name())
            .collect();
        assert_eq!(
            types,
            ["list", "input", "input", "input", "confirm", "input"]
        );
    }

    #[test]
    fn test_choices() {
        let questions = questions(PrefixStyle::Emoticon);
        let QuestionKind::List { choices } = &questions[0].kind else {
            panic!("expected a list question");
        };

        assert_eq!(choices.len(), 11);
        assert_eq!(choices[0].value, ChangeType::Fix);
        assert_eq!(choices[0].key, 'x');
        assert!(choices[0].name.starts_with("🪲 fix: A bug fix."));
        assert_eq!(choices[10].value, ChangeType::Revert);
    }

    #[test]
    fn test_filters() {
        let questions = questions(PrefixStyle::Emoticon);

        assert_eq!(
            questions[1].apply_filter(" ").unwrap_err().message(),
            "scope is required"
        );
        assert_eq!(
            questions[2].apply_filter(".").unwrap_err().message(),
            "subject is required"
        );
        assert_eq!(questions[3].apply_filter("a|b").unwrap(), "a\nb");
        assert!(questions[4].filter.is_none());
        assert_eq!(questions[5].apply_filter(" as is ").unwrap(), " as is ");
    }

    #[test]
    fn test_breaking_defaults_to_no() {
        let questions = questions(PrefixStyle::Emoticon);
        assert_eq!(questions[4].kind, QuestionKind::Confirm { default: false });
    }
}
