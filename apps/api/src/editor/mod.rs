// Editor operations: pure transformations of a `Resume`.
// Each takes the current value and returns the next one, or a typed `EditError`
// leaving the caller's value untouched.

pub mod commands;
pub mod entities;
pub mod reorder;
pub mod tags;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use commands::{apply_edit, EditOutcome, ResumeEdit};
pub use reorder::move_item;
pub use tags::{parse_tags, InputDrafts};

/// The four user-ordered lists of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Experiences,
    Projects,
    Education,
    Skills,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("{kind} '{id}' not found")]
    UnknownEntity { kind: &'static str, id: String },

    #[error("index {index} is out of range for a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("an entry must keep at least one {0}")]
    LastBullet(&'static str),
}
