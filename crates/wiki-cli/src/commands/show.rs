use std::io::Write;

use wiki_core::models::strip_heading;
use wiki_core::validate::normalize_title;
use wiki_core::EntryRepository;

use crate::error::CliError;

pub fn run_show(
    store: &impl EntryRepository,
    title: &str,
    body_only: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let title = normalize_title(title)?;
    let stored = store
        .get_entry(&title)
        .ok_or_else(|| CliError::EntryNotFound(title.clone()))?;

    let text = if body_only {
        strip_heading(&title, &stored)
    } else {
        stored.as_str()
    };
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}
