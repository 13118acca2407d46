use std::io::Write;

use wiki_core::EntryRepository;

use crate::error::CliError;

pub fn run_list(
    store: &impl EntryRepository,
    as_json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let titles = store.list_entries();

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&titles)?)?;
    } else {
        for title in titles {
            writeln!(out, "{title}")?;
        }
    }

    Ok(())
}
