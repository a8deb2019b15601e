//! JSON file store
//!
//! Keeps the sequence as a JSON array of `{ index, x, y, color }` records.
//! Saves go to a temporary file in the same directory which is then renamed
//! over the target, so a failed save never leaves a half-written file.

use super::{SquareStore, StoreError};
use crate::models::Square;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// File name used when no path is configured
pub const DEFAULT_STORE_FILE: &str = "squares.json";

/// Square store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Store at `path`, pretty-printed
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Toggle indented output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Directory the temporary file must live in for the rename to be atomic
    fn target_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl SquareStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Square>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        // A freshly created (touched) file holds no squares yet.
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let squares: Vec<Square> =
            serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %self.path.display(), count = squares.len(), "loaded squares");
        Ok(squares)
    }

    fn save_all(&self, squares: &[Square]) -> Result<(), StoreError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(squares)
        } else {
            serde_json::to_string(squares)
        }
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let dir = self.target_dir();
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        debug!(path = %self.path.display(), count = squares.len(), "saved squares");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        assert_eq!(JsonFileStore::default().path(), Path::new(DEFAULT_STORE_FILE));
    }

    #[test]
    fn test_bare_file_name_targets_current_dir() {
        let store = JsonFileStore::new("squares.json");
        assert_eq!(store.target_dir(), Path::new("."));
    }

    #[test]
    fn test_nested_path_targets_parent() {
        let store = JsonFileStore::new("data/grid/squares.json");
        assert_eq!(store.target_dir(), Path::new("data/grid"));
    }
}
