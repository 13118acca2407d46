use std::io::Write;

use serde::Serialize;
use wiki_core::util::compact_text;
use wiki_core::validate::normalize_query;
use wiki_core::{EntryRepository, SearchOutcome};

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub exact: Option<String>,
    pub entries: Vec<String>,
}

impl SearchReport {
    pub fn from_outcome(query: String, outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Exact(title) => Self {
                query,
                entries: vec![title.clone()],
                exact: Some(title),
            },
            SearchOutcome::Matches(entries) => Self {
                query,
                exact: None,
                entries,
            },
            SearchOutcome::Empty => Self {
                query,
                exact: None,
                entries: Vec::new(),
            },
        }
    }
}

pub fn run_search(
    store: &impl EntryRepository,
    query: &str,
    as_json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let query = normalize_query(query)?;
    let outcome = store.search(&query);
    let report = SearchReport::from_outcome(query, outcome);

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    // An exact hit behaves like opening the page.
    if let Some(title) = report.exact.as_deref() {
        let stored = store
            .get_entry(title)
            .ok_or_else(|| CliError::EntryNotFound(title.to_string()))?;
        writeln!(out, "{}", stored.trim_end())?;
    } else if report.entries.is_empty() {
        eprintln!("No entries match '{}'", compact_text(&report.query));
    } else {
        for title in &report.entries {
            writeln!(out, "{title}")?;
        }
    }

    Ok(())
}
