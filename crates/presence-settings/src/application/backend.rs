//! Persistence contract between the settings storage and its host.
//!
//! A backend stores opaque text documents by name.  It knows nothing about
//! settings records, formats, or defaults; all of that lives in
//! [`super::settings_storage::SettingsStorage`].
//!
//! # Testability
//!
//! The production implementation writes files; tests use the in-memory
//! backend from `infrastructure::storage::memory`, or a `mockall` mock of the
//! trait when a failure has to be injected.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for settings persistence.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored document could not be parsed into its settings record.
    #[error("failed to parse {name} settings: {message}")]
    Parse { name: &'static str, message: String },

    /// A settings record could not be serialised for storage.
    #[error("failed to serialize {name} settings: {message}")]
    Serialize { name: &'static str, message: String },
}

/// Stores named text documents on behalf of the settings storage.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsBackend: Send + Sync {
    /// Returns the document called `name`, or `None` if it was never written.
    fn read(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Creates or replaces the document called `name`.
    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError>;

    /// Deletes the document called `name`.  Removing a missing document is
    /// not an error.
    fn remove(&self, name: &str) -> Result<(), StorageError>;

    /// Human-readable location of the document (a path, or a memory marker).
    fn location(&self, name: &str) -> String;
}
