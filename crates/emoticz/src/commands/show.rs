//! Show command.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use emoticz_plugin::CommitStyle;

use super::{create_style, load_config};

/// What to print.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Topic {
    /// A complete example message
    Example,
    /// The message layout
    Schema,
    /// The regular expression a valid message matches
    SchemaPattern,
    /// The long-form commit rules
    Info,
}

/// Arguments for the show command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// What to print
    #[arg(value_enum)]
    pub topic: Topic,
}

/// Runs the show command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ShowArgs) -> Result<()> {
    let config = load_config()?;
    let style = create_style(&config);

    match args.topic {
        Topic::Example => println!("{}", style.example()),
        Topic::Schema => println!("{}", style.schema()),
        Topic::SchemaPattern => println!("{}", style.schema_pattern()),
        Topic::Info => {
            let info = style.info().context("failed to load commit rules")?;
            println!("{}", info.trim_end());
        }
    }

    Ok(())
}
