//! File-backed token store

use jobboard_core::{CoreError, CoreResult, TokenStore};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Keeps the bearer token in a single file under the data directory
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at `<data_dir>/<key>`
    pub fn new(data_dir: &Path, key: &str) -> Self {
        Self {
            path: data_dir.join(key),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to read token file: {e}");
                None
            }
        }
    }

    fn set(&self, token: &str) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(|e| {
            CoreError::storage(format!("cannot open {}: {e}", self.path.display()))
        })?;
        file.write_all(token.as_bytes())?;
        debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Token removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path(), "accessToken");

        assert_eq!(store.get(), None);
        store.set("first").unwrap();
        store.set("second").unwrap();
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path(), "accessToken");

        store.set("t").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(&dir.path().join("nested/state"), "accessToken");

        store.set("t").unwrap();
        assert_eq!(store.get().as_deref(), Some("t"));
    }

    #[test]
    fn test_blank_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path(), "accessToken");
        fs::write(store.path(), "  \n").unwrap();

        assert_eq!(store.get(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path(), "accessToken");
        store.set("t").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
