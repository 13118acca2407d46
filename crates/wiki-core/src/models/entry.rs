//! Entry model

use serde::{Deserialize, Serialize};

/// File extension (without the dot) of every stored entry.
pub const ENTRY_EXTENSION: &str = "md";

/// A wiki entry: a title and its Markdown body.
///
/// `content` never includes the `# <title>` heading line; that line only
/// exists in the stored representation (see [`render_stored`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique, case-sensitive identifier, also the file stem
    pub title: String,
    /// Markdown body
    pub content: String,
}

impl Entry {
    /// Create an entry from a title and body
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Build an entry from the text returned by the store, dropping the
    /// injected heading when present.
    #[must_use]
    pub fn from_stored(title: impl Into<String>, stored: &str) -> Self {
        let title = title.into();
        let content = strip_heading(&title, stored).to_string();
        Self { title, content }
    }

    /// Stored representation of this entry
    #[must_use]
    pub fn to_stored(&self) -> String {
        render_stored(&self.title, &self.content)
    }
}

/// Format an entry the way it is written to disk: `# <title>\n<content>`.
#[must_use]
pub fn render_stored(title: &str, content: &str) -> String {
    format!("# {title}\n{content}")
}

/// Return the body of stored entry text.
///
/// Only a leading `# <title>` line matching `title` exactly is removed.
/// Text without that heading (for example a file written by hand) is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use wiki_core::models::strip_heading;
///
/// assert_eq!(strip_heading("Rust", "# Rust\nA language."), "A language.");
/// assert_eq!(strip_heading("Rust", "No heading here"), "No heading here");
/// ```
#[must_use]
pub fn strip_heading<'a>(title: &str, stored: &'a str) -> &'a str {
    let Some(rest) = stored
        .strip_prefix("# ")
        .and_then(|rest| rest.strip_prefix(title))
    else {
        return stored;
    };

    if rest.is_empty() {
        return rest;
    }
    rest.strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(stored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_stored_prefixes_heading() {
        assert_eq!(render_stored("Foo", "bar"), "# Foo\nbar");
        assert_eq!(render_stored("Foo", ""), "# Foo\n");
    }

    #[test]
    fn strip_heading_removes_matching_heading_only() {
        assert_eq!(strip_heading("Foo", "# Foo\nbar\nbaz"), "bar\nbaz");
        assert_eq!(strip_heading("Foo", "# Foo\r\nbar"), "bar");
        assert_eq!(strip_heading("Foo", "# Food\nbar"), "# Food\nbar");
        assert_eq!(strip_heading("Foo", "# Other\nbar"), "# Other\nbar");
        assert_eq!(strip_heading("Foo", "# Foo"), "");
    }

    #[test]
    fn strip_heading_is_case_sensitive() {
        assert_eq!(strip_heading("foo", "# Foo\nbar"), "# Foo\nbar");
    }

    #[test]
    fn from_stored_round_trips_with_to_stored() {
        let entry = Entry::from_stored("Python", "# Python\nA *snake* language.\n");
        assert_eq!(entry.content, "A *snake* language.\n");
        assert_eq!(entry.to_stored(), "# Python\nA *snake* language.\n");
    }
}
