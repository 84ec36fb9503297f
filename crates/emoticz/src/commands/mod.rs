//! Subcommand implementations.

pub mod bump;
pub mod check;
pub mod commit;
pub mod init;
pub mod parse;
pub mod show;

use anyhow::{Context, Result};
use tracing::debug;

use emoticz_config::{Config, load_or_default};
use emoticz_style_emoticon::{EmoticonConfig, EmoticonStyle, InfoSource};

/// Loads `emoticz.toml` from the current directory or its parents, or the defaults.
fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("failed to read current directory")?;
    load_or_default(&current_dir).context("failed to load configuration")
}

/// Builds the commit style described by the configuration.
fn create_style(config: &Config) -> EmoticonStyle {
    let info = config
        .info
        .file
        .clone()
        .map_or(InfoSource::Bundled, InfoSource::File);

    debug!(prefix = %config.style.prefix, ?info, "creating commit style");

    EmoticonStyle::with_config(EmoticonConfig {
        prefix: config.style.prefix,
        info,
    })
}
