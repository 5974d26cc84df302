//! Generic settings storage.
//!
//! `SettingsStorage<T>` holds one settings record of type `T` and moves it to
//! and from a [`SettingsBackend`].  The record type supplies its own identity
//! and document format through [`SettingsData`]; the storage supplies the
//! load/save cycle, first-run defaults, and "modified since last save"
//! tracking.
//!
//! # Lifecycle
//!
//! ```text
//! new()  ──►  load()  ──►  state_mut() / set_state()  ──►  save()
//!   │           │                                            │
//!   defaults    defaults if the document is missing          snapshot updated
//! ```
//!
//! A storage that is never loaded still works: it holds `T::default()` and
//! `save()` writes those defaults.

use std::fmt;
use std::sync::Arc;

use presence_core::{render_json, DocumentFormat, RenderError, SettingsData};
use tracing::{debug, info, warn};

use super::backend::{SettingsBackend, StorageError};

/// A settings record together with the backend it is persisted in.
pub struct SettingsStorage<T: SettingsData> {
    backend: Arc<dyn SettingsBackend>,
    state: T,
    /// Value last read from or written to the backend.
    persisted: T,
    loaded: bool,
}

impl<T: SettingsData> SettingsStorage<T> {
    /// Creates a storage holding `T::default()`.  Nothing is read yet.
    pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
        Self {
            backend,
            state: T::default(),
            persisted: T::default(),
            loaded: false,
        }
    }

    /// Creates a storage and immediately loads it.
    ///
    /// # Errors
    ///
    /// See [`SettingsStorage::load`].
    pub fn open(backend: Arc<dyn SettingsBackend>) -> Result<Self, StorageError> {
        let mut storage = Self::new(backend);
        storage.load()?;
        Ok(storage)
    }

    /// Identity of the stored record type.
    pub fn storage_name(&self) -> &'static str {
        T::STORAGE_NAME
    }

    /// Where the record's document lives in the backend.
    pub fn location(&self) -> String {
        self.backend.location(T::FILE_NAME)
    }

    /// Reads the record from the backend, replacing the held state.
    ///
    /// A missing document is not an error: the state becomes `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Parse`] if the document exists but cannot be
    /// decoded (the held state is left unchanged), or any error the backend
    /// reports while reading.
    pub fn load(&mut self) -> Result<&T, StorageError> {
        let state = match self.backend.read(T::FILE_NAME)? {
            Some(text) => decode::<T>(&text)?,
            None => {
                debug!("no stored {} settings, using defaults", T::STORAGE_NAME);
                T::default()
            }
        };
        debug!("loaded {} settings from {}", T::STORAGE_NAME, self.location());
        self.persisted = state.clone();
        self.state = state;
        self.loaded = true;
        Ok(&self.state)
    }

    /// Writes the held state to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialize`] if the record cannot be encoded, or
    /// any error the backend reports while writing.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let text = encode(&self.state)?;
        self.backend.write(T::FILE_NAME, &text)?;
        self.persisted = self.state.clone();
        info!("saved {} settings to {}", T::STORAGE_NAME, self.location());
        Ok(())
    }

    /// Deletes the stored document and resets the state to defaults.
    ///
    /// # Errors
    ///
    /// Returns any error the backend reports while removing the document.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.backend.remove(T::FILE_NAME)?;
        self.state = T::default();
        self.persisted = T::default();
        info!("cleared {} settings at {}", T::STORAGE_NAME, self.location());
        Ok(())
    }

    /// Current settings.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Mutable access to the current settings.  Changes are kept in memory
    /// until [`SettingsStorage::save`] is called.
    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }

    /// Replaces the current settings wholesale.
    pub fn set_state(&mut self, state: T) {
        self.state = state;
    }

    /// Restores the current settings to defaults without touching the backend.
    pub fn reset(&mut self) {
        self.state = T::default();
    }

    /// Discards unsaved changes.
    pub fn revert(&mut self) {
        self.state = self.persisted.clone();
    }

    /// `true` if the current settings differ from what was last loaded or
    /// saved.
    pub fn is_modified(&self) -> bool {
        self.state != self.persisted
    }

    /// `true` once [`SettingsStorage::load`] has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Renders the current settings as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if serialisation fails.
    pub fn render(&self) -> Result<String, RenderError> {
        render_json(&self.state)
    }

    /// Consumes the storage and returns the current settings.
    pub fn into_state(self) -> T {
        self.state
    }
}

impl<T: SettingsData> Clone for SettingsStorage<T> {
    /// Copies the settings; the copy shares the same backend.
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: self.state.clone(),
            persisted: self.persisted.clone(),
            loaded: self.loaded,
        }
    }
}

impl<T: SettingsData> PartialEq for SettingsStorage<T> {
    /// Two storages are equal when they hold equal settings.
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T: SettingsData + fmt::Debug> fmt::Debug for SettingsStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStorage")
            .field("name", &T::STORAGE_NAME)
            .field("state", &self.state)
            .field("loaded", &self.loaded)
            .finish()
    }
}

// ── Document codec ────────────────────────────────────────────────────────────

fn decode<T: SettingsData>(text: &str) -> Result<T, StorageError> {
    let result = match T::FORMAT {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        DocumentFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    };
    result.map_err(|message| {
        warn!("stored {} settings are malformed: {message}", T::STORAGE_NAME);
        StorageError::Parse {
            name: T::STORAGE_NAME,
            message,
        }
    })
}

fn encode<T: SettingsData>(state: &T) -> Result<String, StorageError> {
    let result = match T::FORMAT {
        DocumentFormat::Json => serde_json::to_string_pretty(state).map_err(|e| e.to_string()),
        DocumentFormat::Toml => toml::to_string_pretty(state).map_err(|e| e.to_string()),
    };
    result.map_err(|message| StorageError::Serialize {
        name: T::STORAGE_NAME,
        message,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
