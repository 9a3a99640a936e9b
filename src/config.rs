use std::{env, path::PathBuf};
use tracing::Level;
use crate::storage::DEFAULT_SLOT_KEY;

pub const STORAGE_DIR_VAR: &str = "KVS_STORAGE_DIR";
pub const SLOT_KEY_VAR: &str = "KVS_SLOT_KEY";
pub const LOG_VAR: &str = "KVS_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub slot_key: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            log_level: Level::WARN,
        }
    }
}

impl Config {
    /// Defaults overridden by `KVS_STORAGE_DIR`, `KVS_SLOT_KEY` and `KVS_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(STORAGE_DIR_VAR).filter(|v| !v.is_empty()) {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup(SLOT_KEY_VAR).filter(|v| !v.is_empty()) {
            config.slot_key = key;
        }
        if let Some(level) = lookup(LOG_VAR).and_then(|v| v.parse().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Command line flags win over the environment.
    pub fn with_overrides(
        mut self,
        storage_dir: Option<PathBuf>,
        slot_key: Option<String>,
        verbosity: u8,
    ) -> Self {
        if let Some(dir) = storage_dir {
            self.storage_dir = dir;
        }
        if let Some(key) = slot_key {
            self.slot_key = key;
        }
        self.log_level = match verbosity {
            0 => self.log_level,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        self
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("kvs-database"))
        .unwrap_or_else(|| PathBuf::from("./storage"))
}
