//! Field-level reading and editing of settings records.
//!
//! Fields are addressed by their serialised key, with `.` separating nested
//! records (`timeout_minutes`, `file.details`).  Editing goes through the
//! record's JSON form: the new value is placed into the rendered object, which
//! is then deserialised back into the record.  A value of the wrong type is
//! therefore rejected with serde's own message, and the record is left
//! unchanged.
//!
//! Optional fields that are currently unset are not present in the rendered
//! form; reading one reports [`EditError::UnknownField`].  Setting `null`
//! clears an optional field.

use presence_core::SettingsData;
use serde_json::Value;
use thiserror::Error;

/// Error type for field access.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("unknown or unset field {0:?}")]
    UnknownField(String),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("failed to convert settings to JSON: {0}")]
    Convert(String),
}

/// Reads the field at `key`.
///
/// # Errors
///
/// Returns [`EditError::UnknownField`] if no such field is present.
pub fn get_field<T: SettingsData>(settings: &T, key: &str) -> Result<Value, EditError> {
    let value = to_value(settings)?;
    value
        .pointer(&pointer(key))
        .cloned()
        .ok_or_else(|| EditError::UnknownField(key.to_string()))
}

/// Sets the field at `key` from user input.
///
/// `raw` is parsed as JSON first (`true`, `15`, `"text"`, `[...]`); input that
/// is not valid JSON is taken as a plain string, so `set description hello`
/// works without quoting.
///
/// # Errors
///
/// Returns [`EditError::UnknownField`] if the record has no field `key`, or
/// [`EditError::InvalidValue`] if the value does not fit the field's type.
pub fn set_field<T: SettingsData>(settings: &mut T, key: &str, raw: &str) -> Result<(), EditError> {
    let parsed = parse_input(raw);
    let fallback = Value::String(raw.to_string());
    match apply(settings, key, parsed.clone()) {
        // `set description 42` means the text "42", not a number.
        Err(EditError::InvalidValue { .. }) if parsed != fallback => {
            apply(settings, key, fallback)
        }
        result => result,
    }
}

fn apply<T: SettingsData>(settings: &mut T, key: &str, new_value: Value) -> Result<(), EditError> {
    let mut object = to_value(settings)?;
    let existed = object.pointer(&pointer(key)).is_some();

    let (parent_key, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (pointer(parent), leaf),
        None => (String::new(), key),
    };
    let parent = object
        .pointer_mut(&parent_key)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| EditError::UnknownField(key.to_string()))?;
    parent.insert(leaf.to_string(), new_value.clone());

    let updated: T = serde_json::from_value(object).map_err(|e| EditError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })?;

    // serde ignores unknown keys, so an unknown field shows up as a value
    // that did not survive the round trip.
    let stored = to_value(&updated)?.pointer(&pointer(key)).cloned();
    let accepted = match stored {
        Some(stored) => stored == new_value,
        None => new_value.is_null() && existed,
    };
    if !accepted {
        return Err(EditError::UnknownField(key.to_string()));
    }

    *settings = updated;
    Ok(())
}

fn parse_input(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Converts a dotted key into a JSON pointer (`file.details` → `/file/details`).
fn pointer(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }
    key.split('.')
        .map(|part| format!("/{}", part.replace('~', "~0").replace('/', "~1")))
        .collect()
}

fn to_value<T: SettingsData>(settings: &T) -> Result<Value, EditError> {
    serde_json::to_value(settings).map_err(|e| EditError::Convert(e.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
