use std::io::Write;

use wiki_core::models::strip_heading;
use wiki_core::validate::normalize_title;
use wiki_core::EntryRepository;

use crate::commands::common::capture_editor_input_with_initial;
use crate::error::CliError;

pub fn run_edit(
    store: &impl EntryRepository,
    title: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let title = normalize_title(title)?;
    let stored = store
        .get_entry(&title)
        .ok_or_else(|| CliError::EntryNotFound(title.clone()))?;
    let body = strip_heading(&title, &stored);

    let Some(edited_content) = capture_editor_input_with_initial(body)? else {
        return Err(CliError::EmptyEditedContent);
    };

    apply_edit(store, &title, body, &edited_content, out)?;
    Ok(())
}

/// Save `edited` over the entry unless it matches `original`.
///
/// Returns whether the entry was written.
pub fn apply_edit(
    store: &impl EntryRepository,
    title: &str,
    original: &str,
    edited: &str,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let changed = edited.trim() != original.trim();
    if changed {
        store.save_entry(title, edited)?;
        tracing::debug!(title = %title, "Saved entry");
    }

    writeln!(out, "{title}")?;
    Ok(changed)
}
