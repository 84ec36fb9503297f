//! Bump command.

use anyhow::{Result, bail};
use clap::Args;
use semver::Version;
use tracing::info;

use emoticz_bumper_pattern::PatternBumper;
use emoticz_plugin::{BumpStrategy, BumpType, CommitStyle, Plugin};

use super::{create_style, load_config};

/// Arguments for the bump command.
#[derive(Debug, Args)]
pub struct BumpArgs {
    /// Bump MINOR instead of MAJOR for breaking changes
    #[arg(long)]
    pub major_version_zero: bool,

    /// The current version; the next version is printed as well
    #[arg(long)]
    pub current_version: Option<Version>,

    /// Commit messages to analyze
    #[arg(required = true)]
    pub messages: Vec<String>,
}

/// Calculates the next version.
fn calculate_next_version(current: &Version, bump_type: BumpType) -> Version {
    match bump_type {
        BumpType::Major => Version::new(current.major + 1, 0, 0),
        BumpType::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpType::Patch => Version::new(current.major, current.minor, current.patch + 1),
        BumpType::None => current.clone(),
    }
}

/// Runs the bump command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: BumpArgs) -> Result<()> {
    let config = load_config()?;
    let major_version_zero = args.major_version_zero || config.bump.major_version_zero;

    if major_version_zero
        && let Some(current) = &args.current_version
        && current.major != 0
    {
        bail!("major version zero is set but the current version {current} has a non-zero major");
    }

    let style = create_style(&config);
    let bumper = PatternBumper::new(style.bump_rules(major_version_zero));
    info!(bumper = bumper.name(), major_version_zero, "using bump strategy");

    let bump_type = bumper.determine(&args.messages);
    info!(bump_type = %bump_type, count = args.messages.len(), "determined bump type");

    println!("{bump_type}");
    if let Some(current) = &args.current_version {
        let next = calculate_next_version(current, bump_type);
        println!("{current} -> {next}");
    }

    Ok(())
}
