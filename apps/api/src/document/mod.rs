// Resume document store.
// The document is an explicit value mutated only through `ResumeDocument::apply`.
// Nothing is persisted server-side; every request carries the document it edits.

pub mod actions;
pub mod handlers;
pub mod import;
pub mod sections;

use thiserror::Error;

/// Reasons a reducer action is rejected. The document is left unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("No {kind} entry with id '{id}'")]
    EntryNotFound { kind: &'static str, id: String },

    #[error("Section index {index} is out of range for {len} sections")]
    SectionIndexOutOfRange { index: usize, len: usize },

    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("Add a work experience entry before applying suggestions")]
    NoExperience,
}
