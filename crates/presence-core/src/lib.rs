//! # presence-core
//!
//! Shared library for the presence integration containing the settings
//! records, the value types they are built from, and the JSON renderer used to
//! turn any record into a human-readable string.
//!
//! This crate has no file-system, network, or UI dependencies.  Loading and
//! saving settings lives in the `presence-settings` crate, which holds these
//! records inside a generic `SettingsStorage<T>`.
//!
//! # Architecture overview (for beginners)
//!
//! The integration shows what you are working on (application, project, file)
//! as a "rich presence" in a chat client.  Two settings records control it:
//!
//! - **`domain::project`** – Project-scoped settings.  One instance exists per
//!   open project and is dropped when the project closes.
//!
//! - **`domain::application`** – Application-wide settings: idle timeout and
//!   the layout of the presence lines for each context.
//!
//! - **`domain::values`** – The small enums both records are built from
//!   (which text goes on which line, which icon is shown, and so on).
//!
//! - **`render`** – The shared, stateless JSON serializer.
//!
//! - **`settings`** – The [`SettingsData`] trait that identifies a record type
//!   to the generic storage machinery.

pub mod domain;
pub mod render;
pub mod settings;

// Re-export the most-used types at the crate root so callers can write
// `presence_core::ProjectSettingsStorage` instead of the full module path.
pub use domain::application::{ApplicationSettings, LayoutSettings};
pub use domain::project::{PresenceButton, ProjectSettings, ProjectSettingsStorage};
pub use domain::validation::ValidationError;
pub use domain::values::{
    ApplicationType, IdleVisibility, PresenceContext, PresenceIcon, PresenceText, PresenceTime,
    ProjectShow,
};
pub use render::{render_json, render_json_pretty, RenderError};
pub use settings::{DocumentFormat, SettingsData};
