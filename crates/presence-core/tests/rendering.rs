//! Integration tests for rendering settings records as JSON.
//!
//! These tests go through the public crate API only: construct a record, set
//! fields, render, and parse the output back with serde_json.

use presence_core::{
    render_json_pretty, ApplicationSettings, PresenceButton, PresenceText, ProjectSettings,
    ProjectSettingsStorage, ProjectShow,
};
use serde_json::Value;

fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("rendered output must be valid JSON")
}

#[test]
fn test_project_fields_appear_under_their_own_keys() {
    let mut settings = ProjectSettingsStorage::new();
    settings.set_show(ProjectShow::Disabled);
    settings.set_description("line one\nline \"two\"");

    let value = parse(&settings.to_string());

    assert_eq!(value["show"], "disabled");
    assert_eq!(value["description"], "line one\nline \"two\"");
    assert!(value.get("name_override").is_none());
}

#[test]
fn test_non_ascii_text_survives_rendering() {
    // Arrange
    let mut settings = ProjectSettingsStorage::new();
    settings.set_name_override(Some("Проект ✓ 项目".to_string()));

    // Act
    let restored: ProjectSettingsStorage =
        serde_json::from_str(&settings.to_string()).expect("deserialize");

    // Assert
    assert_eq!(restored.name_override(), Some("Проект ✓ 项目"));
    assert_eq!(restored, settings);
}

#[test]
fn test_buttons_render_as_array_of_objects() {
    let mut settings = ProjectSettingsStorage::new();
    settings.set_buttons(vec![
        PresenceButton::new("Docs", "https://docs.example.org"),
        PresenceButton::new("Issues", "https://issues.example.org"),
    ]);

    let value = parse(&settings.to_string());

    let buttons = value["buttons"].as_array().expect("buttons array");
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[1]["label"], "Issues");
    assert_eq!(buttons[1]["url"], "https://issues.example.org");
}

#[test]
fn test_application_settings_pretty_rendering_parses_back() {
    let mut cfg = ApplicationSettings::default();
    cfg.project.details = PresenceText::Custom;
    cfg.project.details_custom = "On {project}".to_string();

    let json = render_json_pretty(&cfg).expect("render");
    let restored: ApplicationSettings = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, cfg);
}

#[test]
fn test_records_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProjectSettingsStorage>();
    assert_send_sync::<ApplicationSettings>();
}
