//! Project-scoped settings.
//!
//! [`ProjectSettingsStorage`] is created when a project is opened (or its
//! settings are first accessed) and dropped when the project closes.  It adds
//! no persistence logic of its own: the generic `SettingsStorage<T>` in the
//! `presence-settings` crate holds an instance and loads/saves it.
//!
//! The record renders itself as JSON through [`std::fmt::Display`], so
//! `settings.to_string()` always reflects the field values at the moment of
//! the call.  Nothing is cached.
//!
//! # Example
//!
//! ```rust
//! use presence_core::{ProjectSettings, ProjectSettingsStorage};
//!
//! let mut settings = ProjectSettingsStorage::new();
//! settings.set_description("Rust port of the settings layer");
//! assert_eq!(settings.description(), "Rust port of the settings layer");
//! assert!(settings.to_string().contains("\"description\""));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;
use crate::domain::values::ProjectShow;
use crate::render::{render_json, RenderError};
use crate::settings::{DocumentFormat, SettingsData};

/// Maximum number of buttons the presence can display.
pub const MAX_BUTTONS: usize = 2;

/// Read access to the shape of a project settings record.
///
/// Code that only needs to *read* project settings (e.g. a presence renderer)
/// should take `&impl ProjectSettings` instead of the concrete record.
pub trait ProjectSettings {
    /// Whether the project appears in the presence.
    fn show(&self) -> ProjectShow;

    /// Name shown instead of the project directory name, if any.
    fn name_override(&self) -> Option<&str>;

    /// Free-text description of the project.
    fn description(&self) -> &str;

    /// Buttons attached to the presence while this project is focused.
    fn buttons(&self) -> &[PresenceButton];

    /// Name to display for a project whose directory is `dir_name`.
    ///
    /// A blank override counts as no override.
    fn display_name<'a>(&'a self, dir_name: &'a str) -> &'a str {
        match self.name_override() {
            Some(name) if !name.trim().is_empty() => name,
            _ => dir_name,
        }
    }
}

/// A link button shown under the presence.
///
/// Missing keys load as empty strings; [`ProjectSettingsStorage::validate`]
/// rejects such a button before it is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceButton {
    pub label: String,
    pub url: String,
}

impl PresenceButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Project-level settings record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettingsStorage {
    show: ProjectShow,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_override: Option<String>,
    description: String,
    buttons: Vec<PresenceButton>,
}

impl ProjectSettingsStorage {
    /// Creates a record holding default values.  Cannot fail.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_show(&mut self, show: ProjectShow) {
        self.show = show;
    }

    pub fn set_name_override(&mut self, name: Option<String>) {
        self.name_override = name;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_buttons(&mut self, buttons: Vec<PresenceButton>) {
        self.buttons = buttons;
    }

    /// Renders the current field values as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if serialisation fails.  The fallible form
    /// exists for callers that want to handle that case; `to_string()` panics
    /// instead.
    pub fn to_json(&self) -> Result<String, RenderError> {
        render_json(self)
    }

    /// Checks the record against the limits of the presence API.
    ///
    /// Construction and deserialisation never validate; callers that are
    /// about to persist user input run this first.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.buttons.len() > MAX_BUTTONS {
            return Err(ValidationError::TooManyButtons(self.buttons.len()));
        }
        for (index, button) in self.buttons.iter().enumerate() {
            if button.label.trim().is_empty() {
                return Err(ValidationError::EmptyButtonLabel { index });
            }
            if !(button.url.starts_with("http://") || button.url.starts_with("https://")) {
                return Err(ValidationError::InvalidButtonUrl {
                    index,
                    url: button.url.clone(),
                });
            }
        }
        Ok(())
    }
}

impl ProjectSettings for ProjectSettingsStorage {
    fn show(&self) -> ProjectShow {
        self.show
    }

    fn name_override(&self) -> Option<&str> {
        self.name_override.as_deref()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn buttons(&self) -> &[PresenceButton] {
        &self.buttons
    }
}

impl SettingsData for ProjectSettingsStorage {
    const STORAGE_NAME: &'static str = "project";
    const FILE_NAME: &'static str = "presence-project.json";
    const FORMAT: DocumentFormat = DocumentFormat::Json;
}

impl fmt::Display for ProjectSettingsStorage {
    /// Writes the record as compact JSON.
    ///
    /// A render failure is reported as [`fmt::Error`], which makes
    /// `to_string()` panic: the error is not recoverable at this level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|e| {
            tracing::error!("{e}");
            fmt::Error
        })?;
        f.write_str(&json)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
