//! Title search for the wiki
//!
//! Search works on entry titles only. An exact, case-sensitive hit resolves
//! straight to that entry; otherwise the query is matched as a
//! case-insensitive substring of every title.

/// Result of resolving a search query against the entry titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is exactly the title of an entry
    Exact(String),
    /// Titles containing the query, in listing order
    Matches(Vec<String>),
    /// Nothing matched
    Empty,
}

impl SearchOutcome {
    /// Titles to display for this outcome
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        match self {
            Self::Exact(title) => vec![title.as_str()],
            Self::Matches(titles) => titles.iter().map(String::as_str).collect(),
            Self::Empty => Vec::new(),
        }
    }

    /// Check if nothing matched
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Resolve `query` against `titles`.
///
/// `titles` is expected in the store's listing order, which the `Matches`
/// variant preserves.
pub fn search_titles<S: AsRef<str>>(titles: &[S], query: &str) -> SearchOutcome {
    if let Some(exact) = titles.iter().find(|title| title.as_ref() == query) {
        return SearchOutcome::Exact(exact.as_ref().to_string());
    }

    let needle = query.to_lowercase();
    let matches = titles
        .iter()
        .map(AsRef::as_ref)
        .filter(|title| title.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect::<Vec<_>>();

    if matches.is_empty() {
        SearchOutcome::Empty
    } else {
        SearchOutcome::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TITLES: [&str; 3] = ["Foo", "Foobar", "baz"];

    #[test]
    fn exact_match_resolves_to_single_title() {
        assert_eq!(
            search_titles(&TITLES, "Foo"),
            SearchOutcome::Exact("Foo".to_string())
        );
    }

    #[test]
    fn lowercase_query_falls_back_to_substring_matches() {
        assert_eq!(
            search_titles(&TITLES, "foo"),
            SearchOutcome::Matches(vec!["Foo".to_string(), "Foobar".to_string()])
        );
    }

    #[test]
    fn substring_match_is_case_insensitive_both_ways() {
        assert_eq!(
            search_titles(&TITLES, "BA"),
            SearchOutcome::Matches(vec!["Foobar".to_string(), "baz".to_string()])
        );
    }

    #[test]
    fn no_match_is_empty() {
        let outcome = search_titles(&TITLES, "xyz");
        assert!(outcome.is_empty());
        assert!(outcome.titles().is_empty());
    }

    #[test]
    fn empty_title_list_is_empty() {
        let titles: [&str; 0] = [];
        assert_eq!(search_titles(&titles, "Foo"), SearchOutcome::Empty);
    }
}
