//! Store configuration shared by the API server and the CLI.
//!
//! The entries root is resolved once at startup and handed to
//! [`FsEntryStore::new`]; nothing reads the working directory implicitly.

use std::env;
use std::path::PathBuf;

use crate::store::FsEntryStore;
use crate::util::normalize_text_option;

/// Environment variable naming the entries directory
pub const ENTRIES_DIR_VAR: &str = "WIKI_ENTRIES_DIR";

/// Entries directory used when nothing else is configured
pub const DEFAULT_ENTRIES_DIR: &str = "entries";

/// Read one process environment variable.
///
/// Unset and non-Unicode values both read as `None`.
pub fn env_lookup(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Where entries live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub entries_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            entries_dir: PathBuf::from(DEFAULT_ENTRIES_DIR),
        }
    }
}

impl StoreConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Resolve from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        normalize_text_option(lookup(ENTRIES_DIR_VAR)).map_or_else(Self::default, |dir| Self {
            entries_dir: PathBuf::from(dir),
        })
    }

    /// Prefer an explicit directory (for example a CLI flag) over this config.
    #[must_use]
    pub fn with_override(self, entries_dir: Option<PathBuf>) -> Self {
        entries_dir.map_or(self, |entries_dir| Self { entries_dir })
    }

    /// Build the store described by this config
    pub fn open_store(&self) -> FsEntryStore {
        FsEntryStore::new(self.entries_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_relative_entries_dir() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config.entries_dir, PathBuf::from("entries"));
    }

    #[test]
    fn reads_trimmed_env_value() {
        let config = StoreConfig::from_lookup(|name| {
            (name == ENTRIES_DIR_VAR).then(|| "  /srv/wiki/entries ".to_string())
        });
        assert_eq!(config.entries_dir, PathBuf::from("/srv/wiki/entries"));
    }

    #[test]
    fn blank_env_value_falls_back_to_default() {
        let config = StoreConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, StoreConfig::default());
    }

    #[cfg(unix)]
    #[test]
    fn from_env_tolerates_non_unicode_variables() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "WIKI_CORE_TEST_NON_UNICODE";
        env::set_var(name, OsStr::from_bytes(b"\xff\xfe"));

        assert_eq!(env_lookup(name), None);
        let _config = StoreConfig::from_env();

        env::remove_var(name);
    }

    #[test]
    fn explicit_override_wins() {
        let config = StoreConfig::default().with_override(Some(PathBuf::from("/tmp/wiki")));
        assert_eq!(config.open_store().root(), PathBuf::from("/tmp/wiki").as_path());

        let unchanged = StoreConfig::default().with_override(None);
        assert_eq!(unchanged, StoreConfig::default());
    }
}
