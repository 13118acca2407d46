//! Data models for the wiki

mod entry;

pub use entry::{render_stored, strip_heading, Entry, ENTRY_EXTENSION};
