//! Parse command.

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;

use emoticz_commit::ParsedCommit;
use emoticz_plugin::CommitStyle;

use super::{create_style, load_config};

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// The commit message to parse
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ParseOutput {
    #[serde(flatten)]
    commit: ParsedCommit,
    in_changelog: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    changelog_section: Option<String>,
}

/// Runs the parse command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ParseArgs) -> Result<()> {
    let config = load_config()?;
    let style = create_style(&config);

    let Some(commit) = style.parse_commit(&args.message) else {
        bail!("not a valid commit message: {}", args.message.lines().next().unwrap_or(""));
    };

    let output = ParseOutput {
        commit,
        in_changelog: style.in_changelog(&args.message),
        changelog_section: style.changelog_section(&args.message),
    };

    let json = serde_json::to_string_pretty(&output).context("failed to serialize commit")?;
    println!("{json}");
    Ok(())
}
