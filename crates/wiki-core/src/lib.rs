//! wiki-core - Core library for the wiki
//!
//! This crate contains the entry model, the file-backed entry store, title
//! search, and the input validation shared by the wiki front-ends (HTTP API
//! and CLI).

pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
pub mod util;
pub mod validate;

pub use error::{Error, Result};
pub use models::Entry;
pub use search::SearchOutcome;
pub use store::{EntryRepository, FsEntryStore};
