//! In-memory settings backend for unit testing and dry runs.
//!
//! Clones share the same underlying map, so a test can keep one handle to
//! inspect what a storage wrote through another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::backend::{SettingsBackend, StorageError};

/// A [`SettingsBackend`] that keeps documents in a shared map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    documents: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with one document.
    pub fn with_document(name: &str, contents: &str) -> Self {
        let backend = Self::new();
        backend
            .documents
            .lock()
            .expect("lock poisoned")
            .insert(name.to_string(), contents.to_string());
        backend
    }

    /// Returns a copy of the document called `name`, if present.
    pub fn document(&self, name: &str) -> Option<String> {
        self.documents.lock().expect("lock poisoned").get(name).cloned()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.lock().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsBackend for MemoryBackend {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.document(name))
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        self.documents
            .lock()
            .expect("lock poisoned")
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        self.documents.lock().expect("lock poisoned").remove(name);
        Ok(())
    }

    fn location(&self, name: &str) -> String {
        format!("memory:{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_documents() {
        // Arrange
        let backend = MemoryBackend::new();
        let observer = backend.clone();

        // Act
        backend.write("doc", "contents").expect("write");

        // Assert
        assert_eq!(observer.document("doc").as_deref(), Some("contents"));
        assert_eq!(observer.len(), 1);
    }

    #[test]
    fn test_remove_deletes_document() {
        let backend = MemoryBackend::with_document("doc", "x");
        backend.remove("doc").expect("remove");
        assert!(backend.is_empty());
        assert_eq!(backend.read("doc").expect("read"), None);
    }

    #[test]
    fn test_location_marks_memory() {
        assert_eq!(MemoryBackend::new().location("doc"), "memory:doc");
    }
}
