use std::env;
use std::path::PathBuf;

/// File used when `NOTES_FILE` is not set, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "notes.json";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const DATA_FILE_ENV: &str = "NOTES_FILE";
pub const LOG_FILTER_ENV: &str = "NOTES_LOG";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Backing file of the record store, used verbatim.
    pub data_file: PathBuf,
    /// `tracing` filter directive for diagnostics on stderr.
    pub log_filter: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl NotesConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(DATA_FILE_ENV).filter(|v| !v.is_empty()) {
            config.data_file = PathBuf::from(path);
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.is_empty()) {
            config.log_filter = filter;
        }
        config
    }
}
