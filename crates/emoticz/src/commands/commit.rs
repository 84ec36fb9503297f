//! Commit command.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use emoticz_plugin::CommitStyle;

use super::{create_style, load_config};
use crate::prompt;

/// Arguments for the commit command.
#[derive(Debug, Args)]
pub struct CommitArgs {
    /// Write the message to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the commit command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CommitArgs) -> Result<()> {
    let config = load_config()?;
    let style = create_style(&config);

    let answers = prompt::ask(&style.questions(), &mut io::stdin().lock(), &mut io::stderr())
        .context("failed to collect answers")?;
    let message = style.message(&answers);

    info!(
        change_type = %answers.prefix,
        breaking = answers.is_breaking_change,
        "composed commit message"
    );

    match args.output {
        Some(path) => fs::write(&path, format!("{message}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{message}"),
    }

    Ok(())
}
