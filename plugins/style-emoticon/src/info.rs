//! Long-form help text.

use std::path::PathBuf;

use emoticz_plugin::{PluginError, PluginResult};
use tracing::debug;

const BUNDLED_INFO: &str = include_str!("../resources/conventional_commits_info.txt");

/// Where the long-form help text comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InfoSource {
    /// The text packaged with the plugin.
    #[default]
    Bundled,
    /// A text file on disk.
    File(PathBuf),
}

impl InfoSource {
    /// Reads the help text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    pub fn load(&self) -> PluginResult<String> {
        match self {
            Self::Bundled => Ok(BUNDLED_INFO.to_string()),
            Self::File(path) => {
                debug!(?path, "reading info resource");
                if !path.exists() {
                    return Err(PluginError::ResourceNotFound(path.clone()));
                }
                std::fs::read_to_string(path).map_err(|source| PluginError::ResourceRead {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
