//! Settings records for the presence integration.
//!
//! This module contains plain data with no I/O.  The records derive serde's
//! `Serialize`/`Deserialize` so the storage layer and the JSON renderer can
//! handle them without hand-written mapping code.
//!
//! Every record is annotated with `#[serde(default)]`: a stored document that
//! predates a newer field still loads, and the missing field takes its
//! default value.  Nested tables fill their own missing fields the same way.  Unknown fields in a document are ignored for the same
//! reason in the other direction.

/// Application-wide settings.
pub mod application;

/// Project-scoped settings and the `ProjectSettings` capability.
pub mod project;

/// Validation failures reported before a record is saved.
pub mod validation;

/// Value enums shared by both records.
pub mod values;
