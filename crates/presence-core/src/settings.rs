//! Type registration for the generic settings storage.
//!
//! A settings record opts into persistence by implementing [`SettingsData`].
//! The trait carries no behaviour of its own; it names the record (so the
//! storage can log and locate it) and says which document format it is
//! written in.

use serde::{de::DeserializeOwned, Serialize};

/// On-disk document format of a settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Pretty-printed JSON.
    Json,
    /// Pretty-printed TOML.
    Toml,
}

impl DocumentFormat {
    /// File extension conventionally used for the format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Toml => "toml",
        }
    }
}

/// A settings record that the generic storage can load, save, and compare.
///
/// `Default` supplies the values used on first run, `Clone` and `PartialEq`
/// give the storage its snapshot and "modified" tracking.
pub trait SettingsData:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Send + Sync + 'static
{
    /// Stable identity of the record type, used in logs and errors.
    const STORAGE_NAME: &'static str;

    /// Name of the document the record is stored in.
    const FILE_NAME: &'static str;

    /// Format of the stored document.
    const FORMAT: DocumentFormat;
}
