//! Check command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use emoticz_plugin::CommitStyle;

use super::{create_style, load_config};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// The commit message to check
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file, such as `.git/COMMIT_EDITMSG`
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Drops `#` comment lines, as git does for edited messages.
fn strip_comments(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

fn read_message(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(strip_comments(&content))
}

/// Runs the check command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CheckArgs) -> Result<()> {
    let message = match (args.message, args.file) {
        (Some(message), _) => message,
        (None, Some(path)) => read_message(&path)?,
        (None, None) => bail!("a message or --file is required"),
    };

    let config = load_config()?;
    let style = create_style(&config);

    if !style.is_valid_message(&message) {
        bail!(
            "commit message does not follow the schema:\n\n{}\n\nexample:\n\n{}",
            style.schema(),
            style.example()
        );
    }

    info!("commit message is valid");
    println!("Commit message is valid");
    Ok(())
}
