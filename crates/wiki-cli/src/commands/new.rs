use std::io::Write;

use wiki_core::store::create_entry;
use wiki_core::validate::{normalize_content, normalize_title};
use wiki_core::EntryRepository;

use crate::commands::common::resolve_entry_content;
use crate::error::CliError;

pub fn run_new(
    store: &impl EntryRepository,
    title: &str,
    content_parts: &[String],
    out: &mut impl Write,
) -> Result<(), CliError> {
    let title = normalize_title(title)?;
    let content = resolve_entry_content(content_parts)?;
    save_new_entry(store, &title, &content, out)
}

pub fn save_new_entry(
    store: &impl EntryRepository,
    title: &str,
    content: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let content = normalize_content(content)?;
    create_entry(store, title, &content)?;

    tracing::debug!(title = %title, "Created entry");
    writeln!(out, "{title}")?;
    Ok(())
}
