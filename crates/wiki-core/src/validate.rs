//! Input validation for the HTTP and CLI boundaries.
//!
//! The store uses titles verbatim as file stems and performs no sanitizing,
//! so every front-end runs user input through these helpers before calling
//! into it.

use crate::error::{Error, Result};

/// Longest accepted title, in characters
pub const MAX_TITLE_CHARS: usize = 200;

/// Trim and validate an entry title.
///
/// Rejects empty titles, `.` and `..`, path separators, and control
/// characters (including NUL).
pub fn normalize_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(Error::InvalidInput("title cannot be empty".to_string()));
    }
    if title == "." || title == ".." {
        return Err(Error::InvalidInput(format!("title '{title}' is reserved")));
    }
    if title.contains(['/', '\\']) {
        return Err(Error::InvalidInput(
            "title cannot contain path separators".to_string(),
        ));
    }
    if title.chars().any(char::is_control) {
        return Err(Error::InvalidInput(
            "title cannot contain control characters".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(Error::InvalidInput(format!(
            "title is longer than {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(title.to_string())
}

/// Trim entry content, rejecting whitespace-only input.
pub fn normalize_content(raw: &str) -> Result<String> {
    let content = raw.trim();
    if content.is_empty() {
        Err(Error::InvalidInput("content cannot be empty".to_string()))
    } else {
        Ok(content.to_string())
    }
}

/// Trim a search query, rejecting blank input.
pub fn normalize_query(raw: &str) -> Result<String> {
    let query = raw.trim();
    if query.is_empty() {
        Err(Error::InvalidInput("search query cannot be empty".to_string()))
    } else {
        Ok(query.to_string())
    }
}
