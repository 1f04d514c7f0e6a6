use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::io::store::{SettingsStore, StoreError};

/// File name of the TOML settings document inside the store directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// TOML-backed settings store.
///
/// The document is kept as a toml_edit tree so comments and formatting a
/// user put in the file survive a round trip through the editor. Saves are
/// atomic: write to a temp file in the same directory, then rename over.
pub struct FileStore {
    dir: PathBuf,
    doc: toml_edit::DocumentMut,
}

impl FileStore {
    /// Default store directory: `$XDG_CONFIG_HOME/clockset`, falling back
    /// to `$HOME/.config/clockset`.
    pub fn default_dir() -> Result<PathBuf, StoreError> {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
            && !xdg.is_empty()
        {
            return Ok(PathBuf::from(xdg).join("clockset"));
        }
        match env::var("HOME") {
            Ok(home) if !home.is_empty() => Ok(PathBuf::from(home).join(".config/clockset")),
            _ => Err(StoreError::NoStoreDir),
        }
    }

    /// Resolve the store directory from an optional `-C` override.
    pub fn resolve_dir(override_dir: Option<&str>) -> Result<PathBuf, StoreError> {
        match override_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => Self::default_dir(),
        }
    }

    /// Open the store in `dir`. A missing settings file is an empty store,
    /// not an error; a file that exists but does not parse is an error.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(SETTINGS_FILE);
        let doc = match fs::read_to_string(&path) {
            Ok(text) => text.parse().map_err(|e| StoreError::ParseError {
                path: path.clone(),
                source: e,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml_edit::DocumentMut::new(),
            Err(e) => {
                return Err(StoreError::ReadError {
                    path: path.clone(),
                    source: e,
                });
            }
        };
        Ok(FileStore {
            dir: dir.to_path_buf(),
            doc,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// The document text as it would be written to disk.
    pub fn to_document_string(&self) -> String {
        self.doc.to_string()
    }
}

impl SettingsStore for FileStore {
    fn get_list(&self, key: &str) -> Option<Vec<String>> {
        let array = self.doc.get(key)?.as_array()?;
        Some(
            array
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect(),
        )
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.doc.get(key)?.as_str().map(String::from)
    }

    fn set_list(&mut self, key: &str, values: &[String]) {
        let mut array = toml_edit::Array::new();
        for v in values {
            array.push(v.as_str());
        }
        self.doc[key] = toml_edit::value(array);
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.doc[key] = toml_edit::value(value);
    }

    fn save(&mut self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::WriteError {
            path: self.dir.clone(),
            source: e,
        })?;
        let path = self.path();
        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::WriteError {
                path: path.clone(),
                source: e,
            })?;
        tmp.write_all(self.doc.to_string().as_bytes())
            .map_err(|e| StoreError::WriteError {
                path: path.clone(),
                source: e,
            })?;
        tmp.persist(&path).map_err(|e| StoreError::WriteError {
            path,
            source: e.error,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TIME_FORMAT_KEY, WORLDCLOCKS_KEY};
    use tempfile::TempDir;

    #[test]
    fn missing_file_opens_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert!(store.get_list(WORLDCLOCKS_KEY).is_none());
        assert!(store.get_string(TIME_FORMAT_KEY).is_none());
    }

    #[test]
    fn save_then_reopen_round_trips() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();
        store.set_list(
            WORLDCLOCKS_KEY,
            &[
                "London|Europe/London".to_string(),
                "Paris|Europe/Paris".to_string(),
            ],
        );
        store.set_string(TIME_FORMAT_KEY, "%H:%M");
        store.save().unwrap();

        let reopened = FileStore::open(tmp.path()).unwrap();
        assert_eq!(
            reopened.get_list(WORLDCLOCKS_KEY).unwrap(),
            vec!["London|Europe/London", "Paris|Europe/Paris"]
        );
        assert_eq!(reopened.get_string(TIME_FORMAT_KEY).unwrap(), "%H:%M");
    }

    #[test]
    fn save_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested/clockset");
        let mut store = FileStore::open(&dir).unwrap();
        store.set_string(TIME_FORMAT_KEY, "%H:%M");
        store.save().unwrap();
        assert!(dir.join(SETTINGS_FILE).exists());
    }

    #[test]
    fn user_comments_survive_a_save() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(SETTINGS_FILE),
            "# hand-tuned\ntime-format = \"%H:%M\"\n",
        )
        .unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();
        store.set_string(TIME_FORMAT_KEY, "%H:%M:%S");
        store.save().unwrap();
        let written = fs::read_to_string(tmp.path().join(SETTINGS_FILE)).unwrap();
        assert!(written.contains("# hand-tuned"));
        assert!(written.contains("time-format = \"%H:%M:%S\""));
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(SETTINGS_FILE), "worldclocks = [unclosed").unwrap();
        assert!(matches!(
            FileStore::open(tmp.path()),
            Err(StoreError::ParseError { .. })
        ));
    }

    #[test]
    fn document_snapshot() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();
        store.set_list(
            WORLDCLOCKS_KEY,
            &[
                "London|Europe/London".to_string(),
                "NYC|America/New_York".to_string(),
            ],
        );
        store.set_string(TIME_FORMAT_KEY, "%H:%M");
        insta::assert_snapshot!(store.to_document_string(), @r#"
        worldclocks = ["London|Europe/London", "NYC|America/New_York"]
        time-format = "%H:%M"
        "#);
    }
}
