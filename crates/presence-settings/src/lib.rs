//! presence-settings library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # Layers
//!
//! ```text
//! main.rs (CLI)
//!   └─ application/     SettingsStorage<T>, ProjectRegistry, SettingsBackend trait
//!   └─ infrastructure/  FileBackend, MemoryBackend, platform paths
//! ```

pub mod application;
pub mod infrastructure;
