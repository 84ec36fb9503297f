//! Configuration schema.

use std::path::PathBuf;

use emoticz_commit::PrefixStyle;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Message style configuration.
    #[serde(default)]
    pub style: StyleConfig,

    /// Bump rule configuration.
    #[serde(default)]
    pub bump: BumpConfig,

    /// Help text configuration.
    #[serde(default)]
    pub info: InfoConfig,
}

/// Message style configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// How change types are rendered at the head of a message.
    #[serde(default)]
    pub prefix: PrefixStyle,
}

/// Bump rule configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpConfig {
    /// Bump the minor version for breaking changes while the major version is zero.
    #[serde(default)]
    pub major_version_zero: bool,
}

/// Help text configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoConfig {
    /// File to read the long-form help from instead of the bundled text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
