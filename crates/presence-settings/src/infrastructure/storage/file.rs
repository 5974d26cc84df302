//! File-system settings backend.
//!
//! Each document is a file directly under the backend's root directory.  The
//! root is created on first write, so pointing a backend at a project that
//! has never stored settings is fine: reads return `None` until something is
//! saved.
//!
//! Writes go to a temporary sibling file that is then renamed over the
//! document, so a reader sees either the old or the new contents.  Every
//! write uses its own temporary name, and the temporary file is removed if
//! the write fails.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::application::backend::{SettingsBackend, StorageError};

/// Distinguishes temporary files of concurrent writes within one process.
static WRITE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Stores documents as files under `root`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the document called `name`.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Unique temporary path next to the document called `name`.
    fn temp_path_of(&self, name: &str) -> PathBuf {
        let sequence = WRITE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        self.root
            .join(format!(".{name}.{}.{sequence}.tmp", std::process::id()))
    }
}

/// Removes a temporary file left by a failed write.
fn discard(tmp: &Path) {
    match std::fs::remove_file(tmp) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("could not remove temporary file {}: {e}", tmp.display()),
    }
}

impl SettingsBackend for FileBackend {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_of(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        // Ensure directory exists before writing.
        std::fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;

        let path = self.path_of(name);
        let tmp = self.temp_path_of(name);
        let result = std::fs::write(&tmp, contents)
            .map_err(|source| StorageError::Io {
                path: tmp.clone(),
                source,
            })
            .and_then(|()| {
                std::fs::rename(&tmp, &path).map_err(|source| StorageError::Io {
                    path: path.clone(),
                    source,
                })
            });
        if let Err(e) = result {
            discard(&tmp);
            return Err(e);
        }
        debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        let path = self.path_of(name);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    fn location(&self, name: &str) -> String {
        self.path_of(name).display().to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
