//! Message composition.

use emoticz_commit::{Answers, PrefixStyle};

/// Prefix added to the footer of a breaking change.
pub const BREAKING_CHANGE_PREFIX: &str = "BREAKING CHANGE: ";

/// Renders the commit message for an answer set.
///
/// Layout: `<prefix>[<scope>]<!>: <subject>`, then the body and the parenthesized
/// footer, each after a blank line. Empty optional answers leave no trace.
#[must_use]
pub fn compose(answers: &Answers, style: PrefixStyle) -> String {
    let prefix = answers.prefix.prefix(style);

    let scope = if answers.scope.is_empty() {
        String::new()
    } else {
        format!("[{}]", answers.scope)
    };

    let body = if answers.body.is_empty() {
        String::new()
    } else {
        format!("\n\n{}", answers.body)
    };

    let (breaking, footer) = if answers.is_breaking_change {
        ("!", format!("{BREAKING_CHANGE_PREFIX}{}", answers.footer))
    } else {
        ("", answers.footer.clone())
    };

    let footer = if footer.is_empty() {
        footer
    } else {
        format!("\n\n({footer})")
    };

    format!("{prefix}{scope}{breaking}: {}{body}{footer}", answers.subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoticz_commit::ChangeType;

    fn typo_fix() -> emoticz_commit::AnswersBuilder {
        Answers::builder(ChangeType::Fix)
            .scope("main.py")
            .subject("correct minor typos in code")
    }

    #[test]
    fn test_scope_and_subject_only() {
        let message = compose(&typo_fix().build(), PrefixStyle::Plain);
        assert_eq!(message, "fix[main.py]: correct minor typos in code");
    }

    #[test]
    fn test_breaking_with_footer() {
        let answers = typo_fix().breaking(true).footer("closes issue #12").build();
        assert_eq!(
            compose(&answers, PrefixStyle::Plain),
            "fix[main.py]!: correct minor typos in code\n\n(BREAKING CHANGE: closes issue #12)"
        );
    }

    #[test]
    fn test_body_gets_one_blank_line() {
        let answers = typo_fix().body("see details").build();
        let message = compose(&answers, PrefixStyle::Plain);

        assert_eq!(
            message,
            "fix[main.py]: correct minor typos in code\n\nsee details"
        );
        assert_eq!(message.matches("\n\n").count(), 1);
        assert!(!message.contains("\n\n\n"));
    }

    #[test]
    fn test_body_and_footer() {
        let answers = typo_fix()
            .body("see the issue for details")
            .footer("closes issue #12")
            .build();
        assert_eq!(
            compose(&answers, PrefixStyle::Plain),
            "fix[main.py]: correct minor typos in code\n\nsee the issue for details\n\n(closes issue #12)"
        );
    }

    #[test]
    fn test_empty_scope_has_no_brackets() {
        let answers = Answers::builder(ChangeType::Docs).subject("fix typo").build();
        let message = compose(&answers, PrefixStyle::Plain);
        assert_eq!(message, "docs: fix typo");
        assert!(!message.contains('['));
        assert!(!message.contains(']'));
    }

    #[test]
    fn test_breaking_without_scope() {
        let answers = Answers::builder(ChangeType::Feat)
            .subject("drop legacy api")
            .breaking(true)
            .build();
        assert_eq!(
            compose(&answers, PrefixStyle::Plain),
            "feat!: drop legacy api\n\n(BREAKING CHANGE: )"
        );
    }

    #[test]
    fn test_footer_without_breaking() {
        let answers = typo_fix().footer("refs #4").build();
        assert_eq!(
            compose(&answers, PrefixStyle::Plain),
            "fix[main.py]: correct minor typos in code\n\n(refs #4)"
        );
    }

    #[test]
    fn test_emoticon_prefix() {
        let answers = typo_fix().breaking(true).footer("closes issue #12").build();
        assert_eq!(
            compose(&answers, PrefixStyle::Emoticon),
            "🪲 fix[main.py]!: correct minor typos in code\n\n(BREAKING CHANGE: closes issue #12)"
        );
    }

    #[test]
    fn test_deterministic() {
        let answers = typo_fix().body("b").footer("f").build();
        assert_eq!(
            compose(&answers, PrefixStyle::Emoticon),
            compose(&answers.clone(), PrefixStyle::Emoticon)
        );
    }
}
