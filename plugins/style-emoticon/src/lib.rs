//! Emoticon commit style plugin.
//!
//! Messages look like `🪲 fix[main.py]!: correct minor typos in code`, optionally
//! followed by a body and a parenthesized footer. Change types can also be written
//! without their emoticon by selecting [`PrefixStyle::Plain`].

mod info;
mod message;
mod patterns;
mod questions;
mod validators;

use emoticz_commit::{Answers, ChangeType, ParsedCommit, PrefixStyle};
use emoticz_plugin::{BumpRules, CommitStyle, Plugin, PluginResult, Question};

pub use info::InfoSource;
pub use message::{BREAKING_CHANGE_PREFIX, compose};
pub use validators::{parse_scope, parse_subject};

use patterns::Tables;

const SCHEMA: &str = "<type>[<scope>]: <subject>\n\
                      <BLANK LINE>\n\
                      <body>\n\
                      <BLANK LINE>\n\
                      (BREAKING CHANGE: <footer>)";

/// Configuration for the emoticon style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmoticonConfig {
    /// How change types are rendered.
    pub prefix: PrefixStyle,
    /// Where the long-form help text is read from.
    pub info: InfoSource,
}

/// Emoticon commit style.
pub struct EmoticonStyle {
    config: EmoticonConfig,
    tables: &'static Tables,
}

impl EmoticonStyle {
    /// Creates the style with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EmoticonConfig::default())
    }

    /// Creates the style with custom configuration.
    #[must_use]
    pub fn with_config(config: EmoticonConfig) -> Self {
        let tables = patterns::tables(config.prefix);
        Self { config, tables }
    }

    /// Returns the prefix style in use.
    #[must_use]
    pub fn prefix_style(&self) -> PrefixStyle {
        self.config.prefix
    }
}

impl Default for EmoticonStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for EmoticonStyle {
    fn name(&self) -> &'static str {
        "emoticon"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Emoticon-tagged change types with bracketed scopes"
    }
}

impl CommitStyle for EmoticonStyle {
    fn questions(&self) -> Vec<Question> {
        questions::questions(self.config.prefix)
    }

    fn message(&self, answers: &Answers) -> String {
        compose(answers, self.config.prefix)
    }

    fn example(&self) -> String {
        let answers = Answers::builder(ChangeType::Fix)
            .scope("main.py")
            .subject("correct minor typos in code")
            .body("see the issue for details on the typos fixed")
            .footer("closes issue #12")
            .build();
        compose(&answers, self.config.prefix)
    }

    fn schema(&self) -> String {
        SCHEMA.to_string()
    }

    fn schema_pattern(&self) -> &str {
        self.tables.schema.as_str()
    }

    fn is_valid_message(&self, message: &str) -> bool {
        self.tables.schema.is_match(message.trim_end())
    }

    fn info(&self) -> PluginResult<String> {
        self.config.info.load()
    }

    fn bump_rules(&self, major_version_zero: bool) -> &BumpRules {
        if major_version_zero {
            &self.tables.bump_major_version_zero
        } else {
            &self.tables.bump
        }
    }

    fn changelog_pattern(&self) -> &str {
        self.tables.changelog.as_str()
    }

    fn in_changelog(&self, message: &str) -> bool {
        self.tables.changelog.is_match(message)
    }

    /// Parses a composed message back into its parts.
    ///
    /// The last paragraph is taken as the footer when it is wrapped in
    /// parentheses. A body whose final paragraph is parenthesized is therefore
    /// read back as a footer, since the composed text is the same.
    fn parse_commit(&self, message: &str) -> Option<ParsedCommit> {
        let message = message.trim_end();
        let (header, rest) = match message.split_once("\n\n") {
            Some((header, rest)) => (header, Some(rest)),
            None => (message, None),
        };

        let captures = self.tables.header.captures(header)?;
        let change_type = ChangeType::from_prefix(&captures["prefix"])?;

        let mut builder = ParsedCommit::builder(change_type, &captures["subject"]);
        if let Some(scope) = captures.name("scope").filter(|m| !m.as_str().is_empty()) {
            builder = builder.scope(scope.as_str());
        }

        let mut breaking = captures.name("breaking").is_some();

        if let Some(rest) = rest {
            let (body, last) = match rest.rsplit_once("\n\n") {
                Some((body, last)) => (Some(body), last),
                None => (None, rest),
            };

            match last.strip_prefix('(').and_then(|l| l.strip_suffix(')')) {
                Some(footer) => {
                    breaking |= footer.starts_with(BREAKING_CHANGE_PREFIX.trim_end());
                    builder = builder.footer(footer);
                    if let Some(body) = body {
                        builder = builder.body(body);
                    }
                }
                None => builder = builder.body(rest),
            }
        }

        Some(builder.breaking(breaking).build())
    }

    fn change_type_title(&self, change_type: ChangeType) -> Option<String> {
        change_type.changelog_title(self.config.prefix)
    }
}
