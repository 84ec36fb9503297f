//! Commit data types for emoticz.
//!
//! This crate provides the data shared by the plugin and its host:
//! - [`ChangeType`]: The category a commit is classified under
//! - [`PrefixStyle`]: How a change type is rendered at the head of a message
//! - [`Answers`]: The answers collected by the prompt loop
//! - [`ParsedCommit`]: A composed message parsed back into its parts

mod answers;
mod change_type;
mod parsed;

pub use answers::{AnswerError, AnswerField, AnswerValue, Answers, AnswersBuilder};
pub use change_type::{ChangeType, PrefixStyle, UnknownChangeType};
pub use parsed::{ParsedCommit, ParsedCommitBuilder};
