//! File-backed store for the last encoded carrier.
//!
//! The CLI remembers the most recent carrier so `decode --draft` can pick it
//! up later, stored in `~/.vshide/draft.toml` under a single fixed key. The
//! carrier string is kept verbatim - no versioning, no migration. The codec
//! itself never touches this store; it is injected by the caller.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving the draft.
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// On-disk shape of the draft file.
#[derive(Serialize, Deserialize, Debug, Default)]
struct DraftFile {
    /// The last encoded carrier, verbatim.
    carrier: String,
}

/// A store holding at most one carrier.
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    /// Opens the store at the default location (`~/.vshide/draft.toml`).
    pub fn open_default() -> Result<Self, DraftError> {
        Ok(Self::at(Self::default_path()?))
    }

    /// Opens the store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// The default draft file path.
    pub fn default_path() -> Result<PathBuf, DraftError> {
        dirs::home_dir()
            .map(|home| home.join(".vshide").join("draft.toml"))
            .ok_or(DraftError::NoConfigDir)
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the saved carrier, if any.
    ///
    /// A missing file is not an error - it means nothing was saved yet.
    pub fn load(&self) -> Result<Option<String>, DraftError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let draft: DraftFile = toml::from_str(&content)?;
        Ok(Some(draft.carrier))
    }

    /// Saves a carrier, replacing any previous one.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, carrier: &str) -> Result<(), DraftError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let draft = DraftFile {
            carrier: carrier.to_string(),
        };
        let content = toml::to_string_pretty(&draft)?;
        fs::write(&self.path, content)?;

        Ok(())
    }

    /// Removes the saved carrier, if any.
    pub fn clear(&self) -> Result<(), DraftError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, DraftStore) {
        let dir = TempDir::new().unwrap();
        let store = DraftStore::at(dir.path().join("draft.toml"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, store) = temp_store();

        store.save("X\u{E0138}\u{E0159}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("X\u{E0138}\u{E0159}"));
    }

    #[test]
    fn test_save_replaces_previous() {
        let (_dir, store) = temp_store();

        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_carrier_stored_verbatim() {
        let (_dir, store) = temp_store();

        // Selectors and a composed emoji must survive the round trip untouched
        let carrier = "\u{1F44D}\u{1F3FD}\u{FE07}\u{E01EF}";
        store.save(carrier).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some(carrier));
    }

    #[test]
    fn test_clear() {
        let (_dir, store) = temp_store();

        store.save("something").unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing an empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = DraftStore::at(dir.path().join("nested").join("draft.toml"));

        store.save("carrier").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("carrier"));
    }
}
