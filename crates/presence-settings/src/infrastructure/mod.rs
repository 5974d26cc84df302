//! Infrastructure layer for the settings tool.
//!
//! Contains the OS-facing adapters: the file-system backend and the
//! platform-specific location of the application settings.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `presence_core`, but MUST NOT be imported by the `application` layer.

pub mod storage;
