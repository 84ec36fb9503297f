//! Initialize command.

use std::fs;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use emoticz_commit::PrefixStyle;
use emoticz_config::{CONFIG_FILE_NAME, Config, StyleConfig};

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write change types without their emoticon
    #[arg(long)]
    pub plain: bool,
}

fn render(config: &Config) -> Result<String> {
    toml::to_string(config).context("failed to serialize configuration")
}

/// Runs the init command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: InitArgs) -> Result<()> {
    let path = std::env::current_dir()
        .context("failed to read current directory")?
        .join(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!(
            "{} already exists, use --force to overwrite it",
            path.display()
        );
    }

    let config = Config {
        style: StyleConfig {
            prefix: if args.plain {
                PrefixStyle::Plain
            } else {
                PrefixStyle::Emoticon
            },
        },
        ..Config::default()
    };

    fs::write(&path, render(&config)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(?path, "wrote configuration");
    println!("Created {CONFIG_FILE_NAME}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let rendered = render(&Config::default()).unwrap();
        assert!(rendered.contains("[style]"));
        assert!(rendered.contains("prefix = \"emoticon\""));
        assert!(rendered.contains("major_version_zero = false"));
        assert!(!rendered.contains("file"));
    }

    #[test]
    fn test_render_reloads() {
        let config = Config {
            style: StyleConfig {
                prefix: PrefixStyle::Plain,
            },
            ..Config::default()
        };
        let reloaded: Config = toml::from_str(&render(&config).unwrap()).unwrap();
        assert_eq!(reloaded, config);
    }
}
