//! Shared JSON renderer for settings records.
//!
//! Every settings record can be turned into a human-readable string for
//! display, logging, or debugging.  The renderer is a pair of free functions
//! over `serde_json`: there is no serializer object to construct, share, or
//! lock, so any number of threads may render at the same time.
//!
//! # Key order
//!
//! `#[derive(Serialize)]` emits struct fields in declaration order, so the
//! rendered keys follow the order the fields are written in the struct.  This
//! is stable for a given build but is not part of any on-disk contract.

use serde::Serialize;
use thiserror::Error;

/// Error returned when a value cannot be rendered as JSON.
///
/// With the records in this crate this only happens for values serde_json
/// rejects outright, such as a map whose keys are not strings.
#[derive(Debug, Error)]
#[error("failed to render {type_name} as JSON: {source}")]
pub struct RenderError {
    /// Rust type name of the value that failed to render.
    pub type_name: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Renders `value` as compact JSON (no whitespace between tokens).
///
/// # Errors
///
/// Returns [`RenderError`] if serde_json cannot serialise the value.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    serde_json::to_string(value).map_err(|source| RenderError {
        type_name: std::any::type_name::<T>(),
        source,
    })
}

/// Renders `value` as indented JSON for display to a person.
///
/// # Errors
///
/// Returns [`RenderError`] if serde_json cannot serialise the value.
pub fn render_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    serde_json::to_string_pretty(value).map_err(|source| RenderError {
        type_name: std::any::type_name::<T>(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Sample {
        theme: String,
        enabled: bool,
    }

    #[test]
    fn test_render_json_emits_fields_in_declaration_order() {
        // Arrange
        let sample = Sample {
            theme: "dark".to_string(),
            enabled: true,
        };

        // Act
        let json = render_json(&sample).expect("render");

        // Assert
        assert_eq!(json, r#"{"theme":"dark","enabled":true}"#);
    }

    #[test]
    fn test_render_json_pretty_is_indented_and_parses_back() {
        let sample = Sample {
            theme: "light".to_string(),
            enabled: false,
        };

        let json = render_json_pretty(&sample).expect("render");

        assert!(json.contains('\n'), "pretty output must span lines");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["theme"], "light");
        assert_eq!(parsed["enabled"], false);
    }

    #[test]
    fn test_render_json_rejects_non_string_map_keys() {
        // Arrange: serde_json only accepts string-like map keys
        let mut map: HashMap<(u8, u8), u8> = HashMap::new();
        map.insert((1, 2), 3);

        // Act
        let err = render_json(&map).expect_err("tuple keys must fail");

        // Assert
        assert!(err.type_name.contains("HashMap"));
        assert!(err.to_string().starts_with("failed to render"));
    }
}
