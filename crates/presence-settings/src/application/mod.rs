//! Application layer: generic settings persistence and project lifecycle.
//!
//! # Sub-modules
//!
//! - **`backend`** – The [`backend::SettingsBackend`] trait: the host's
//!   persistence contract (read, write, or remove one named document).  The
//!   concrete file and in-memory implementations live in `infrastructure`.
//!
//! - **`settings_storage`** – [`settings_storage::SettingsStorage`], a
//!   container generic over any `SettingsData` record.  It holds the record,
//!   loads and saves it through a backend, and tracks unsaved changes.
//!
//! - **`edit_settings`** – Read or change one field of a record by its
//!   serialised key, used by the command-line editor.
//!
//! - **`project_registry`** – Opens one project storage per project
//!   directory and saves it again when the project closes.
//!
//! **Dependency rule**: this layer depends on `presence_core` only and never
//! imports `infrastructure`.

pub mod backend;
pub mod edit_settings;
pub mod project_registry;
pub mod settings_storage;
