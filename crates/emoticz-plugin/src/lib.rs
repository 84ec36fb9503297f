//! Plugin contract for emoticz.
//!
//! This crate provides the plugin traits and the data they exchange with a host:
//! - [`Plugin`]: Base trait for all plugins
//! - [`CommitStyle`]: Prompts, message composition, pattern tables and help text
//! - [`BumpStrategy`]: Determines the version bump implied by a set of commits
//! - [`Question`]: A data-driven prompt descriptor
//! - [`BumpRules`]: An ordered, first-match-wins severity table

mod error;
mod question;
mod rules;
mod traits;
mod validate;

pub use error::{PluginError, PluginResult, ValidationError};
pub use question::{Choice, Filter, Question, QuestionKind};
pub use rules::{BumpRule, BumpRules};
pub use traits::Plugin;
pub use traits::bumper::{BumpStrategy, BumpType};
pub use traits::style::CommitStyle;
pub use validate::{break_lines, require_non_empty};
