//! Error types for wiki-core

use thiserror::Error;

/// Result type alias using wiki-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wiki-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry not found
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// An entry with this title already exists
    #[error("Entry already exists: {0}")]
    AlreadyExists(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
