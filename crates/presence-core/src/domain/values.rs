//! Value types the settings records are built from.
//!
//! Each enum serialises as a `snake_case` string (e.g. `"application1"`), so
//! stored documents stay readable and editable by hand.  The `label` methods
//! return the text a settings dialog shows for the value.

use serde::{Deserialize, Serialize};

/// Which text is shown on a presence line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceText {
    /// The user-supplied template stored next to the selection.
    Custom,
    /// The line is left empty.
    None,
    /// Application name.
    Application1,
    /// Application version.
    Application2,
    /// Project name.
    Project1,
    /// Project description.
    Project2,
    /// File name.
    File1,
    /// File path relative to the project.
    File2,
    /// Application name and version, as hover text of the large icon.
    ApplicationIconLarge,
    /// Application name, as hover text of the small icon.
    ApplicationIconSmall,
    /// Project name and description, as hover text of the large icon.
    ProjectIconLarge,
    /// Project name, as hover text of the small icon.
    ProjectIconSmall,
    /// Language of the open file, as hover text of the large icon.
    FileIconLarge,
    /// File name, as hover text of the small icon.
    FileIconSmall,
}

impl PresenceText {
    pub fn label(self) -> &'static str {
        match self {
            PresenceText::Custom => "Custom",
            PresenceText::None => "None",
            PresenceText::Application1 => "Application name",
            PresenceText::Application2 => "Application version",
            PresenceText::Project1 => "Project name",
            PresenceText::Project2 => "Project description",
            PresenceText::File1 => "File name",
            PresenceText::File2 => "File path",
            PresenceText::ApplicationIconLarge => "Application name and version",
            PresenceText::ApplicationIconSmall => "Application name",
            PresenceText::ProjectIconLarge => "Project name and description",
            PresenceText::ProjectIconSmall => "Project name",
            PresenceText::FileIconLarge => "File language",
            PresenceText::FileIconSmall => "File name",
        }
    }
}

/// Which icon is shown in a presence icon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceIcon {
    Custom,
    Application,
    /// The icon of the language of the open file.
    File,
    None,
}

impl PresenceIcon {
    pub fn label(self) -> &'static str {
        match self {
            PresenceIcon::Custom => "Custom",
            PresenceIcon::Application => "Application",
            PresenceIcon::File => "File",
            PresenceIcon::None => "None",
        }
    }

    /// Choices offered for the large icon slot of the given context.
    pub fn large_choices(context: PresenceContext) -> &'static [PresenceIcon] {
        Self::choices(context)
    }

    /// Choices offered for the small icon slot of the given context.
    pub fn small_choices(context: PresenceContext) -> &'static [PresenceIcon] {
        Self::choices(context)
    }

    // Both slots offer the same icons; only their defaults differ.
    fn choices(context: PresenceContext) -> &'static [PresenceIcon] {
        match context {
            PresenceContext::File => &[
                PresenceIcon::Custom,
                PresenceIcon::Application,
                PresenceIcon::File,
                PresenceIcon::None,
            ],
            PresenceContext::Application | PresenceContext::Project => {
                &[PresenceIcon::Custom, PresenceIcon::Application, PresenceIcon::None]
            }
        }
    }
}

/// What the user is currently doing, which selects the presence layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceContext {
    /// No project is open.
    Application,
    /// A project is open but no editor.
    Project,
    /// A file is open in an editor.
    File,
}

impl PresenceContext {
    pub const ALL: [PresenceContext; 3] = [
        PresenceContext::Application,
        PresenceContext::Project,
        PresenceContext::File,
    ];

    /// Elapsed-time source shown by default in this context.
    pub fn default_time(self) -> PresenceTime {
        match self {
            PresenceContext::Application => PresenceTime::Application,
            PresenceContext::Project => PresenceTime::Project,
            PresenceContext::File => PresenceTime::File,
        }
    }
}

/// Whose elapsed time is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceTime {
    Application,
    Project,
    File,
    /// No elapsed time is shown.
    Hide,
}

impl PresenceTime {
    pub fn label(self) -> &'static str {
        match self {
            PresenceTime::Application => "Since application start",
            PresenceTime::Project => "Since project open",
            PresenceTime::File => "Since file open",
            PresenceTime::Hide => "Hide",
        }
    }
}

/// What the presence does while the session is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleVisibility {
    /// Keep showing the presence as if the user were active.
    Ignore,
    /// Show an "idle" presence.
    Idle,
    /// Hide the presence entirely.
    Hide,
}

impl IdleVisibility {
    pub fn label(self) -> &'static str {
        match self {
            IdleVisibility::Ignore => "Ignore",
            IdleVisibility::Idle => "Show idle",
            IdleVisibility::Hide => "Hide",
        }
    }
}

/// How the application is named in the presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    /// Product name only (e.g. "IntelliJ IDEA").
    Ide,
    /// Product name with edition (e.g. "IntelliJ IDEA Ultimate").
    IdeEdition,
}

impl ApplicationType {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationType::Ide => "IDE name",
            ApplicationType::IdeEdition => "IDE name and edition",
        }
    }
}

/// Whether a project is visible in the presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectShow {
    /// Show the project and its files.
    #[default]
    Enabled,
    /// Show only the application, never the project or its files.
    ApplicationOnly,
    /// Hide the presence while this project is focused.
    Disabled,
}

impl ProjectShow {
    pub fn label(self) -> &'static str {
        match self {
            ProjectShow::Enabled => "Show project",
            ProjectShow::ApplicationOnly => "Show application only",
            ProjectShow::Disabled => "Hide",
        }
    }

    /// `true` when the project name and files may appear in the presence.
    pub fn shows_project(self) -> bool {
        matches!(self, ProjectShow::Enabled)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
