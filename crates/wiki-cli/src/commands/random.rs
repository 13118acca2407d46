use std::io::Write;

use wiki_core::EntryRepository;

use crate::error::CliError;

pub fn run_random(store: &impl EntryRepository, out: &mut impl Write) -> Result<(), CliError> {
    let title = store.random_entry().ok_or(CliError::NoEntries)?;
    writeln!(out, "{title}")?;
    Ok(())
}
