//! Pattern tables for bump detection, changelog classification and validation.
//!
//! Every table is generated from the change type list so that both prefix styles
//! stay in sync with the composer.

use std::sync::LazyLock;

use emoticz_commit::{ChangeType, PrefixStyle};
use emoticz_plugin::{BumpRules, BumpType};
use regex::Regex;

/// Types whose commits bump the version, with the bump they imply.
const VERSIONED_TYPES: [(ChangeType, BumpType); 4] = [
    (ChangeType::Feat, BumpType::Minor),
    (ChangeType::Fix, BumpType::Patch),
    (ChangeType::Refactor, BumpType::Patch),
    (ChangeType::Perf, BumpType::Patch),
];

/// Matches a type marker ending in the breaking marker.
const BREAKING_RULE: &str = r"^.+!$";

/// Compiled pattern tables for one prefix style.
pub(crate) struct Tables {
    pub(crate) bump: BumpRules,
    pub(crate) bump_major_version_zero: BumpRules,
    pub(crate) schema: Regex,
    pub(crate) changelog: Regex,
    pub(crate) header: Regex,
}

static EMOTICON: LazyLock<Tables> = LazyLock::new(|| Tables::build(PrefixStyle::Emoticon));
static PLAIN: LazyLock<Tables> = LazyLock::new(|| Tables::build(PrefixStyle::Plain));

/// Returns the tables for a prefix style.
pub(crate) fn tables(style: PrefixStyle) -> &'static Tables {
    match style {
        PrefixStyle::Emoticon => &EMOTICON,
        PrefixStyle::Plain => &PLAIN,
    }
}

impl Tables {
    fn build(style: PrefixStyle) -> Self {
        let types = type_alternation(style);

        Self {
            bump: bump_rules(&types, style, BumpType::Major),
            bump_major_version_zero: bump_rules(&types, style, BumpType::Minor),
            schema: Regex::new(&schema_pattern(&types)).expect("invalid schema regex"),
            changelog: Regex::new(&changelog_pattern(&types, style))
                .expect("invalid changelog regex"),
            header: Regex::new(&header_pattern(&types)).expect("invalid header regex"),
        }
    }
}

/// Escaped prefix of one change type.
///
/// The emoticon's variation selector is optional, matching what
/// [`ChangeType::from_prefix`] accepts.
fn prefix_pattern(change_type: ChangeType, style: PrefixStyle) -> String {
    regex::escape(&change_type.prefix(style)).replace('\u{fe0f}', "\u{fe0f}?")
}

/// `fix|feat|...` with each prefix escaped, in prompt order.
fn type_alternation(style: PrefixStyle) -> String {
    ChangeType::ALL
        .iter()
        .map(|&t| prefix_pattern(t, style))
        .collect::<Vec<_>>()
        .join("|")
}

fn bump_rules(types: &str, style: PrefixStyle, breaking: BumpType) -> BumpRules {
    // The scope runs up to the first `]` that closes the marker, so scopes may
    // contain brackets themselves.
    let marker = format!(r"^(?P<marker>(?:{types})(?:\[.*?\])?!?):");

    let type_rules: Vec<String> = VERSIONED_TYPES
        .iter()
        .map(|&(t, _)| format!(r"^{}(?:\[|$)", prefix_pattern(t, style)))
        .collect();

    let mut rules = vec![(BREAKING_RULE, breaking)];
    rules.extend(
        type_rules
            .iter()
            .zip(VERSIONED_TYPES)
            .map(|(pattern, (_, bump))| (pattern.as_str(), bump)),
    );

    BumpRules::new(&marker, &rules).expect("invalid bump regex")
}

fn schema_pattern(types: &str) -> String {
    format!(r"(?s)^(?:{types})\[[^\n]+?\]!?: [^\n]+(?:\n\n.+)?$")
}

fn changelog_pattern(types: &str, style: PrefixStyle) -> String {
    let breaking = match style {
        PrefixStyle::Emoticon => "🚨 BREAKING CHANGE",
        PrefixStyle::Plain => "BREAKING CHANGE",
    };
    format!(r"^(?:(?:{types})(?:\[|!|:)|{breaking})")
}

fn header_pattern(types: &str) -> String {
    format!(r"^(?P<prefix>{types})(?:\[(?P<scope>.*?)\])?(?P<breaking>!)?: (?P<subject>.+)$")
}
