//! Application-wide settings.
//!
//! Unlike project settings, one [`ApplicationSettings`] record exists for the
//! whole application and is stored as TOML in the platform config directory:
//!
//! ```toml
//! show = true
//! timeout_minutes = 5
//! idle = "idle"
//!
//! [project]
//! details = "project1"
//! state = "project2"
//! time = "project"
//! ```
//!
//! Fields absent from the file take their defaults, so an empty file is a
//! valid configuration.  This holds inside the layout tables too: a missing
//! key in `[project]` takes the project layout's default, not the
//! application layout's.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::validation::ValidationError;
use crate::domain::values::{
    ApplicationType, IdleVisibility, PresenceContext, PresenceIcon, PresenceText, PresenceTime,
};
use crate::render::{render_json, RenderError};
use crate::settings::{DocumentFormat, SettingsData};

/// Allowed range for [`ApplicationSettings::timeout_minutes`] (one day max).
pub const TIMEOUT_MINUTES_RANGE: std::ops::RangeInclusive<u32> = 1..=24 * 60 - 1;

/// Application-level settings record.
///
/// Scalar fields are declared before the layout tables so the TOML output
/// keeps every plain key above the first `[table]` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    /// Master switch for the whole presence.
    pub show: bool,
    /// Minutes without activity before the session counts as idle.
    pub timeout_minutes: u32,
    /// Restart the elapsed-time counters when returning from idle.
    pub timeout_reset_time: bool,
    pub idle: IdleVisibility,
    /// Prefix file names with "Reading"/"Editing".
    pub file_prefix: bool,
    /// Hide files ignored by version control (e.g. listed in `.gitignore`).
    pub file_hide_vcs_ignored: bool,
    pub application_type: ApplicationType,
    /// Theme for the application icon; `None` uses the built-in default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_theme: Option<String>,
    /// Theme for the file language icons; `None` uses the built-in default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons_theme: Option<String>,
    /// Last version an update notification was shown for.  Not user-editable.
    pub last_update_notification: String,
    /// Layout while no project is open.
    #[serde(deserialize_with = "application_layout")]
    pub application: LayoutSettings,
    /// Layout while a project is open but no editor.
    #[serde(deserialize_with = "project_layout")]
    pub project: LayoutSettings,
    /// Layout while a file is open in an editor.
    #[serde(deserialize_with = "file_layout")]
    pub file: LayoutSettings,
}

/// Lines, icons and elapsed time shown for one presence context.
///
/// Each `*_custom` string is the template used when the selection next to it
/// is `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSettings {
    pub details: PresenceText,
    pub details_custom: String,
    pub state: PresenceText,
    pub state_custom: String,
    pub icon_large: PresenceIcon,
    pub icon_large_custom: String,
    /// Hover text of the large icon.
    pub icon_large_text: PresenceText,
    pub icon_large_text_custom: String,
    pub icon_small: PresenceIcon,
    pub icon_small_custom: String,
    /// Hover text of the small icon.
    pub icon_small_text: PresenceText,
    pub icon_small_text_custom: String,
    pub time: PresenceTime,
}

impl LayoutSettings {
    /// Default layout for the given context.
    pub fn for_context(context: PresenceContext) -> Self {
        let (details, state, icon_large, icon_small, icon_large_text, icon_small_text) =
            match context {
                PresenceContext::Application => (
                    PresenceText::Application1,
                    PresenceText::Application2,
                    PresenceIcon::Application,
                    PresenceIcon::None,
                    PresenceText::ApplicationIconLarge,
                    PresenceText::ApplicationIconSmall,
                ),
                PresenceContext::Project => (
                    PresenceText::Project1,
                    PresenceText::Project2,
                    PresenceIcon::Application,
                    PresenceIcon::None,
                    PresenceText::ProjectIconLarge,
                    PresenceText::ProjectIconSmall,
                ),
                PresenceContext::File => (
                    PresenceText::File1,
                    PresenceText::File2,
                    PresenceIcon::File,
                    PresenceIcon::Application,
                    PresenceText::FileIconLarge,
                    PresenceText::FileIconSmall,
                ),
            };
        Self {
            details,
            details_custom: String::new(),
            state,
            state_custom: String::new(),
            icon_large,
            icon_large_custom: String::new(),
            icon_large_text,
            icon_large_text_custom: String::new(),
            icon_small,
            icon_small_custom: String::new(),
            icon_small_text,
            icon_small_text_custom: String::new(),
            time: context.default_time(),
        }
    }

    /// Text template for the details line, if it is set to `Custom`.
    pub fn custom_details(&self) -> Option<&str> {
        custom(self.details, &self.details_custom)
    }

    /// Text template for the state line, if it is set to `Custom`.
    pub fn custom_state(&self) -> Option<&str> {
        custom(self.state, &self.state_custom)
    }

    /// Hover text template of the large icon, if it is set to `Custom`.
    pub fn custom_icon_large_text(&self) -> Option<&str> {
        custom(self.icon_large_text, &self.icon_large_text_custom)
    }

    /// Hover text template of the small icon, if it is set to `Custom`.
    pub fn custom_icon_small_text(&self) -> Option<&str> {
        custom(self.icon_small_text, &self.icon_small_text_custom)
    }
}

fn custom(selection: PresenceText, template: &str) -> Option<&str> {
    (selection == PresenceText::Custom).then_some(template)
}

/// A layout table as stored, where any key may be missing.
#[derive(Deserialize)]
struct StoredLayout {
    details: Option<PresenceText>,
    details_custom: Option<String>,
    state: Option<PresenceText>,
    state_custom: Option<String>,
    icon_large: Option<PresenceIcon>,
    icon_large_custom: Option<String>,
    icon_large_text: Option<PresenceText>,
    icon_large_text_custom: Option<String>,
    icon_small: Option<PresenceIcon>,
    icon_small_custom: Option<String>,
    icon_small_text: Option<PresenceText>,
    icon_small_text_custom: Option<String>,
    time: Option<PresenceTime>,
}

impl StoredLayout {
    /// Fills every missing key from the default layout of `context`.
    fn merge_over(self, context: PresenceContext) -> LayoutSettings {
        let base = LayoutSettings::for_context(context);
        LayoutSettings {
            details: self.details.unwrap_or(base.details),
            details_custom: self.details_custom.unwrap_or(base.details_custom),
            state: self.state.unwrap_or(base.state),
            state_custom: self.state_custom.unwrap_or(base.state_custom),
            icon_large: self.icon_large.unwrap_or(base.icon_large),
            icon_large_custom: self.icon_large_custom.unwrap_or(base.icon_large_custom),
            icon_large_text: self.icon_large_text.unwrap_or(base.icon_large_text),
            icon_large_text_custom: self
                .icon_large_text_custom
                .unwrap_or(base.icon_large_text_custom),
            icon_small: self.icon_small.unwrap_or(base.icon_small),
            icon_small_custom: self.icon_small_custom.unwrap_or(base.icon_small_custom),
            icon_small_text: self.icon_small_text.unwrap_or(base.icon_small_text),
            icon_small_text_custom: self
                .icon_small_text_custom
                .unwrap_or(base.icon_small_text_custom),
            time: self.time.unwrap_or(base.time),
        }
    }
}

fn application_layout<'de, D: Deserializer<'de>>(d: D) -> Result<LayoutSettings, D::Error> {
    StoredLayout::deserialize(d).map(|layout| layout.merge_over(PresenceContext::Application))
}

fn project_layout<'de, D: Deserializer<'de>>(d: D) -> Result<LayoutSettings, D::Error> {
    StoredLayout::deserialize(d).map(|layout| layout.merge_over(PresenceContext::Project))
}

fn file_layout<'de, D: Deserializer<'de>>(d: D) -> Result<LayoutSettings, D::Error> {
    StoredLayout::deserialize(d).map(|layout| layout.merge_over(PresenceContext::File))
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            show: true,
            timeout_minutes: 5,
            timeout_reset_time: true,
            idle: IdleVisibility::Idle,
            file_prefix: true,
            file_hide_vcs_ignored: false,
            application_type: ApplicationType::IdeEdition,
            application_theme: None,
            icons_theme: None,
            last_update_notification: String::new(),
            application: LayoutSettings::for_context(PresenceContext::Application),
            project: LayoutSettings::for_context(PresenceContext::Project),
            file: LayoutSettings::for_context(PresenceContext::File),
        }
    }
}

impl ApplicationSettings {
    /// Layout used in the given context.
    pub fn layout(&self, context: PresenceContext) -> &LayoutSettings {
        match context {
            PresenceContext::Application => &self.application,
            PresenceContext::Project => &self.project,
            PresenceContext::File => &self.file,
        }
    }

    /// Idle timeout with `timeout_minutes` clamped into
    /// [`TIMEOUT_MINUTES_RANGE`].
    pub fn idle_timeout(&self) -> Duration {
        let minutes = self
            .timeout_minutes
            .clamp(*TIMEOUT_MINUTES_RANGE.start(), *TIMEOUT_MINUTES_RANGE.end());
        Duration::from_secs(u64::from(minutes) * 60)
    }

    /// Checks user-editable values before they are saved.
    ///
    /// Loading never validates; [`idle_timeout`](Self::idle_timeout) clamps
    /// whatever a hand-edited document holds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TimeoutOutOfRange`] if `timeout_minutes` is
    /// outside [`TIMEOUT_MINUTES_RANGE`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !TIMEOUT_MINUTES_RANGE.contains(&self.timeout_minutes) {
            return Err(ValidationError::TimeoutOutOfRange(self.timeout_minutes));
        }
        Ok(())
    }

    /// Renders the current field values as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, RenderError> {
        render_json(self)
    }
}

impl SettingsData for ApplicationSettings {
    const STORAGE_NAME: &'static str = "application";
    const FILE_NAME: &'static str = "presence.toml";
    const FORMAT: DocumentFormat = DocumentFormat::Toml;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_timeout_is_five_minutes() {
        let cfg = ApplicationSettings::default();
        assert_eq!(cfg.timeout_minutes, 5);
        assert_eq!(cfg.idle_timeout(), Duration::from_secs(300));
    }

    #[test]
    fn test_default_layouts_match_their_context() {
        let cfg = ApplicationSettings::default();
        assert_eq!(cfg.application.details, PresenceText::Application1);
        assert_eq!(cfg.project.state, PresenceText::Project2);
        assert_eq!(cfg.file.icon_large, PresenceIcon::File);
        assert_eq!(cfg.file.icon_small, PresenceIcon::Application);
        assert_eq!(cfg.project.time, PresenceTime::Project);
    }

    #[test]
    fn test_default_icon_texts_match_their_context() {
        let cfg = ApplicationSettings::default();
        assert_eq!(cfg.application.icon_large_text, PresenceText::ApplicationIconLarge);
        assert_eq!(cfg.application.icon_small_text, PresenceText::ApplicationIconSmall);
        assert_eq!(cfg.project.icon_large_text, PresenceText::ProjectIconLarge);
        assert_eq!(cfg.file.icon_small_text, PresenceText::FileIconSmall);
    }

    #[test]
    fn test_default_icons_are_offered_choices() {
        let cfg = ApplicationSettings::default();
        for context in PresenceContext::ALL {
            let layout = cfg.layout(context);
            assert!(PresenceIcon::large_choices(context).contains(&layout.icon_large));
            assert!(PresenceIcon::small_choices(context).contains(&layout.icon_small));
        }
        assert_eq!(cfg.application.icon_small, PresenceIcon::None);
        assert_eq!(cfg.project.icon_small, PresenceIcon::None);
    }

    #[test]
    fn test_idle_timeout_clamps_out_of_range_values() {
        let mut cfg = ApplicationSettings::default();

        cfg.timeout_minutes = 0;
        assert_eq!(cfg.idle_timeout(), Duration::from_secs(60));

        cfg.timeout_minutes = 100_000;
        assert_eq!(cfg.idle_timeout(), Duration::from_secs(1439 * 60));
    }

    #[test]
    fn test_custom_text_only_reported_when_selected() {
        let mut layout = LayoutSettings::for_context(PresenceContext::Project);
        layout.details_custom = "Working on {project}".to_string();
        assert_eq!(layout.custom_details(), None);

        layout.details = PresenceText::Custom;
        assert_eq!(layout.custom_details(), Some("Working on {project}"));
        assert_eq!(layout.custom_state(), None);

        layout.icon_small_text = PresenceText::Custom;
        layout.icon_small_text_custom = "{project}".to_string();
        assert_eq!(layout.custom_icon_small_text(), Some("{project}"));
        assert_eq!(layout.custom_icon_large_text(), None);
    }

    // ── Validation ────────────────────────────────────────────────────────────

    #[test]
    fn test_validate_accepts_range_bounds() {
        let mut cfg = ApplicationSettings::default();
        assert_eq!(cfg.validate(), Ok(()));

        cfg.timeout_minutes = *TIMEOUT_MINUTES_RANGE.start();
        assert_eq!(cfg.validate(), Ok(()));
        cfg.timeout_minutes = *TIMEOUT_MINUTES_RANGE.end();
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_timeout_outside_range() {
        let mut cfg = ApplicationSettings::default();

        cfg.timeout_minutes = 0;
        assert_eq!(cfg.validate(), Err(ValidationError::TimeoutOutOfRange(0)));

        cfg.timeout_minutes = 24 * 60;
        assert_eq!(cfg.validate(), Err(ValidationError::TimeoutOutOfRange(1440)));
    }

    // ── TOML ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_toml_round_trip_preserves_changes() {
        // Arrange
        let mut cfg = ApplicationSettings::default();
        cfg.timeout_minutes = 30;
        cfg.application_theme = Some("classic".to_string());
        cfg.icons_theme = Some("material".to_string());
        cfg.project.icon_large_text = PresenceText::Custom;
        cfg.project.icon_large_text_custom = "{project}".to_string();
        cfg.file.details = PresenceText::Custom;
        cfg.file.details_custom = "Hacking".to_string();

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: ApplicationSettings = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: ApplicationSettings = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, ApplicationSettings::default());
    }

    #[test]
    fn test_partial_toml_overrides_only_given_keys() {
        // Arrange
        let toml_str = r#"
timeout_minutes = 15
idle = "hide"
"#;

        // Act
        let cfg: ApplicationSettings = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.timeout_minutes, 15);
        assert_eq!(cfg.idle, IdleVisibility::Hide);
        assert!(cfg.show);
    }

    #[test]
    fn test_doc_example_parses_with_context_defaults() {
        // Arrange
        let toml_str = r#"
show = true
timeout_minutes = 5
idle = "idle"

[project]
details = "project1"
state = "project2"
time = "project"
"#;

        // Act
        let cfg: ApplicationSettings = toml::from_str(toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, ApplicationSettings::default());
    }

    #[test]
    fn test_partial_layout_table_keeps_its_own_context_defaults() {
        // Arrange
        let toml_str = "[file]\ndetails = \"custom\"\n";

        // Act
        let cfg: ApplicationSettings = toml::from_str(toml_str).expect("deserialize");

        // Assert
        let mut expected = LayoutSettings::for_context(PresenceContext::File);
        expected.details = PresenceText::Custom;
        assert_eq!(cfg.file, expected);
        assert_eq!(cfg.file.state, PresenceText::File2);
        assert_eq!(cfg.file.icon_large, PresenceIcon::File);
        assert_eq!(cfg.file.icon_small, PresenceIcon::Application);
        assert_eq!(cfg.file.time, PresenceTime::File);
        assert_eq!(cfg.project, ApplicationSettings::default().project);
    }

    #[test]
    fn test_nested_tables_mix_partial_and_unknown_keys() {
        // Arrange
        let toml_str = r#"
timeout_minutes = 12

[application]
icon_small = "application"
retired_option = 3

[project]
state_custom = "{project}"
"#;

        // Act
        let cfg: ApplicationSettings = toml::from_str(toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg.timeout_minutes, 12);
        assert_eq!(cfg.application.icon_small, PresenceIcon::Application);
        assert_eq!(cfg.application.details, PresenceText::Application1);
        assert_eq!(cfg.application.time, PresenceTime::Application);
        assert_eq!(cfg.project.state, PresenceText::Project2);
        assert_eq!(cfg.project.state_custom, "{project}");
        assert_eq!(cfg.project.icon_large_text, PresenceText::ProjectIconLarge);
    }

    #[test]
    fn test_unset_themes_are_omitted_from_toml() {
        let toml_str = toml::to_string_pretty(&ApplicationSettings::default()).expect("serialize");
        assert!(!toml_str.contains("theme"), "unset themes must be omitted");
    }

    // ── JSON ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_to_json_is_valid_and_complete() {
        let json = ApplicationSettings::default().to_json().expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["timeout_minutes"], 5);
        assert_eq!(value["file"]["details"], "file1");
        assert_eq!(value["file"]["icon_large_text"], "file_icon_large");
    }

    #[test]
    fn test_partial_json_layout_keeps_context_defaults() {
        let cfg: ApplicationSettings =
            serde_json::from_str(r#"{"project":{"time":"hide"},"icons_theme":"classic"}"#)
                .expect("deserialize");

        assert_eq!(cfg.project.time, PresenceTime::Hide);
        assert_eq!(cfg.project.details, PresenceText::Project1);
        assert_eq!(cfg.project.icon_small_text, PresenceText::ProjectIconSmall);
        assert_eq!(cfg.icons_theme.as_deref(), Some("classic"));
        assert_eq!(cfg.application_theme, None);
    }
}
