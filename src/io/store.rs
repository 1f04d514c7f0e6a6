use std::path::PathBuf;

/// Error type for settings-store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
    #[error("no home directory; set $HOME or pass --store-dir")]
    NoStoreDir,
    #[error("store unavailable")]
    Unavailable,
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Key-value settings backend.
///
/// The editor reads both keys when the window opens and writes both back,
/// whole-list replace, when it closes. Handed to the window and the CLI
/// handlers explicitly rather than living in a global.
pub trait SettingsStore {
    /// Value of a list-of-strings key, or None if unset.
    fn get_list(&self, key: &str) -> Option<Vec<String>>;
    /// Value of a string key, or None if unset.
    fn get_string(&self, key: &str) -> Option<String>;
    /// Replace a list-of-strings key.
    fn set_list(&mut self, key: &str, values: &[String]);
    /// Replace a string key.
    fn set_string(&mut self, key: &str, value: &str);
    /// Persist pending changes.
    fn save(&mut self) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and anywhere a throwaway backend is handy.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: std::collections::HashMap<String, Vec<String>>,
    strings: std::collections::HashMap<String, String>,
    fail_saves: bool,
    save_attempts: usize,
}

impl MemoryStore {
    /// A store whose `save` always fails, for exercising best-effort paths.
    pub fn failing() -> Self {
        MemoryStore {
            fail_saves: true,
            ..Default::default()
        }
    }

    pub fn save_attempts(&self) -> usize {
        self.save_attempts
    }
}

impl SettingsStore for MemoryStore {
    fn get_list(&self, key: &str) -> Option<Vec<String>> {
        self.lists.get(key).cloned()
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn set_list(&mut self, key: &str, values: &[String]) {
        self.lists.insert(key.to_string(), values.to_vec());
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.save_attempts += 1;
        if self.fail_saves {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }
}
