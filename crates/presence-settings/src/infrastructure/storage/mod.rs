//! Storage infrastructure: settings document persistence.
//!
//! - `file` – [`file::FileBackend`], one file per document under a root
//!   directory.  Writes go through a temporary file and a rename, so a crash
//!   mid-write leaves the previous document intact.
//! - `memory` – [`memory::MemoryBackend`], a shared in-memory map for tests
//!   and dry runs.
//! - `paths` – where project and application settings live on disk.

pub mod file;
pub mod memory;
pub mod paths;

pub use file::FileBackend;
pub use memory::MemoryBackend;
