//! Filesystem-backed entry store
//!
//! Every entry is one `<title>.md` file directly inside the entries root.
//! Titles are used verbatim as file stems; callers validate them first.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{render_stored, ENTRY_EXTENSION};
use crate::store::EntryRepository;

/// Entry store rooted at a directory of Markdown files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntryStore {
    root: PathBuf,
}

impl FsEntryStore {
    /// Create a store for the given entries directory.
    ///
    /// The directory is not touched until the first list or save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Entries directory managed by this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `title`
    pub fn entry_path(&self, title: &str) -> PathBuf {
        self.root.join(format!("{title}.{ENTRY_EXTENSION}"))
    }

    fn ensure_root(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root)
    }
}

impl EntryRepository for FsEntryStore {
    fn list_entries(&self) -> Vec<String> {
        if self.ensure_root().is_err() {
            return Vec::new();
        }
        let Ok(dir) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut titles = dir
            .filter_map(std::result::Result::ok)
            .filter(|item| item.file_type().is_ok_and(|kind| !kind.is_dir()))
            .filter_map(|item| title_from_file_name(&item.file_name()))
            .collect::<Vec<_>>();
        titles.sort();
        titles
    }

    fn get_entry(&self, title: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(title)).ok()
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.entry_path(title), render_stored(title, content))?;
        Ok(())
    }
}

/// Recover a title from a directory item name, skipping non-entries
fn title_from_file_name(name: &OsStr) -> Option<String> {
    let stem = name
        .to_str()?
        .strip_suffix(ENTRY_EXTENSION)?
        .strip_suffix('.')?;
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
