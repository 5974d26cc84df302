//! ProjectRegistry: one settings storage per open project.
//!
//! The host opens and closes projects; the registry mirrors that lifecycle:
//!
//! ```text
//! open(dir)  ──►  storage created and loaded  ──►  edits  ──►  close(dir)
//!                                                                  │
//!                                                   saved if modified, then dropped
//! ```
//!
//! Each project gets its own backend from the factory passed to
//! [`ProjectRegistry::new`], so the file backend can store settings inside
//! the project directory while tests hand out in-memory backends.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use presence_core::ProjectSettingsStorage;
use tracing::{debug, info, warn};

use super::backend::{SettingsBackend, StorageError};
use super::settings_storage::SettingsStorage;

/// Storage for a single project's settings.
pub type ProjectStorage = SettingsStorage<ProjectSettingsStorage>;

type BackendFactory = Box<dyn Fn(&Path) -> Arc<dyn SettingsBackend> + Send + Sync>;

/// Open projects keyed by project directory.
pub struct ProjectRegistry {
    factory: BackendFactory,
    projects: HashMap<PathBuf, ProjectStorage>,
}

impl ProjectRegistry {
    /// Creates an empty registry.  `factory` returns the backend a project's
    /// settings are stored in.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&Path) -> Arc<dyn SettingsBackend> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            projects: HashMap::new(),
        }
    }

    /// Opens `project`, loading its settings.  Opening an already open project
    /// returns the existing storage without reloading it.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from loading; the project is not
    /// registered in that case.
    pub fn open(&mut self, project: &Path) -> Result<&mut ProjectStorage, StorageError> {
        match self.projects.entry(project.to_path_buf()) {
            Entry::Occupied(entry) => {
                debug!("project {} already open", project.display());
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let backend = (self.factory)(entry.key());
                let storage = SettingsStorage::open(backend)?;
                info!("opened project {}", project.display());
                Ok(entry.insert(storage))
            }
        }
    }

    /// Returns the storage of an open project.
    pub fn get(&self, project: &Path) -> Option<&ProjectStorage> {
        self.projects.get(project)
    }

    /// Returns the storage of an open project for editing.
    pub fn get_mut(&mut self, project: &Path) -> Option<&mut ProjectStorage> {
        self.projects.get_mut(project)
    }

    /// Closes `project`, saving its settings first if they changed.
    ///
    /// Returns `false` if the project was not open.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from saving.  The project stays open so
    /// the unsaved changes are not lost.
    pub fn close(&mut self, project: &Path) -> Result<bool, StorageError> {
        let Some(storage) = self.projects.get_mut(project) else {
            return Ok(false);
        };
        if storage.is_modified() {
            storage.save()?;
        }
        self.projects.remove(project);
        info!("closed project {}", project.display());
        Ok(true)
    }

    /// Closes every open project.  Projects whose settings fail to save stay
    /// open and are returned with their error.
    pub fn close_all(&mut self) -> Vec<(PathBuf, StorageError)> {
        let mut failures = Vec::new();
        for project in self.open_projects() {
            if let Err(e) = self.close(&project) {
                warn!("failed to save settings of {}: {e}", project.display());
                failures.push((project, e));
            }
        }
        failures
    }

    /// Directories of all open projects, sorted.
    pub fn open_projects(&self) -> Vec<PathBuf> {
        let mut projects: Vec<PathBuf> = self.projects.keys().cloned().collect();
        projects.sort();
        projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
