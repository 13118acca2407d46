//! Entry storage
//!
//! [`EntryRepository`] is the persistence contract: three primitives
//! (`list_entries`, `get_entry`, `save_entry`) plus search and random pick,
//! which are derived from `list_entries` only.

mod fs;

pub use fs::FsEntryStore;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::search::{search_titles, SearchOutcome};

/// Trait for entry storage operations
pub trait EntryRepository {
    /// List all entry titles, sorted ascending
    fn list_entries(&self) -> Vec<String>;

    /// Get the stored text of an entry, heading line included.
    ///
    /// Returns `None` when the entry does not exist or cannot be read.
    fn get_entry(&self, title: &str) -> Option<String>;

    /// Create or fully replace an entry
    fn save_entry(&self, title: &str, content: &str) -> Result<()>;

    /// Resolve a search query against the current titles
    fn search(&self, query: &str) -> SearchOutcome {
        search_titles(&self.list_entries(), query)
    }

    /// Pick a title uniformly at random, `None` when the store is empty
    fn random_entry(&self) -> Option<String> {
        self.list_entries().choose(&mut rand::thread_rng()).cloned()
    }

    /// Pick a title uniformly at random using the given RNG
    fn random_entry_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String>
    where
        Self: Sized,
    {
        self.list_entries().choose(rng).cloned()
    }
}

/// Save a new entry, refusing to overwrite an existing one.
///
/// Inputs are expected to be validated already (see [`crate::validate`]).
pub fn create_entry<R: EntryRepository + ?Sized>(
    repo: &R,
    title: &str,
    content: &str,
) -> Result<()> {
    if repo.get_entry(title).is_some() {
        return Err(Error::AlreadyExists(title.to_string()));
    }
    repo.save_entry(title, content)
}

/// Get an entry or fail with [`Error::NotFound`].
pub fn require_entry<R: EntryRepository + ?Sized>(repo: &R, title: &str) -> Result<String> {
    repo.get_entry(title)
        .ok_or_else(|| Error::NotFound(title.to_string()))
}
