use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] wiki_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No entry content provided")]
    EmptyContent,
    #[error("Edited entry content cannot be empty")]
    EmptyEditedContent,
    #[error("The requested page was not found: {0}")]
    EntryNotFound(String),
    #[error("No available page.")]
    NoEntries,
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
}
