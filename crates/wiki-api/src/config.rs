use std::net::SocketAddr;

use thiserror::Error;
use wiki_core::config::{env_lookup, StoreConfig};
use wiki_core::util::normalize_text_option;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "WIKI_API_BIND_ADDR", "127.0.0.1:8080");
        if bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(
                "WIKI_API_BIND_ADDR must be a socket address like 127.0.0.1:8080".to_string(),
            ));
        }

        let store = StoreConfig::from_lookup(&lookup);

        Ok(Self { bind_addr, store })
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    normalize_text_option(lookup(name)).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn config_uses_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.store.entries_dir, PathBuf::from("entries"));
    }

    #[test]
    fn config_reads_overrides() {
        let mut map = HashMap::new();
        map.insert("WIKI_API_BIND_ADDR", " 0.0.0.0:9000 ");
        map.insert("WIKI_ENTRIES_DIR", "/var/lib/wiki");

        let config =
            AppConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_string())).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.store.entries_dir, PathBuf::from("/var/lib/wiki"));
    }

    #[test]
    fn config_rejects_invalid_bind_addr() {
        let err = AppConfig::from_lookup(|key| {
            (key == "WIKI_API_BIND_ADDR").then(|| "localhost".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("WIKI_API_BIND_ADDR"));
    }
}
