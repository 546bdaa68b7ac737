//! Project model and its lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::Developer;

/// Maximum number of images attached to one project.
pub const MAX_IMAGES: usize = 9;

/// Where a project stands.
///
/// The wire format is the display string. Parsing is case-insensitive because
/// older clients wrote `"Ready for production"`; anything unrecognised is kept
/// verbatim in [`ProjectStatus::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    #[default]
    OnlyAnIdea,
    UnderDevelopment,
    ReadyForProduction,
    Other(String),
}

impl ProjectStatus {
    /// The selectable statuses, in the order the create form lists them.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::OnlyAnIdea,
        ProjectStatus::UnderDevelopment,
        ProjectStatus::ReadyForProduction,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::OnlyAnIdea => "Only an Idea",
            ProjectStatus::UnderDevelopment => "Under Development",
            ProjectStatus::ReadyForProduction => "Ready for Production",
            ProjectStatus::Other(s) => s,
        }
    }

    /// CSS-friendly slug, e.g. `"ready-for-production"`.
    pub fn slug(&self) -> String {
        self.as_str().to_lowercase().replace(' ', "-")
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or(ProjectStatus::Other(value))
    }
}

impl From<&str> for ProjectStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        match value {
            ProjectStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A showcased project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: i64,
    /// URL-safe slug, unique within the owner's namespace.
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "super::nullable_list")]
    pub general_tags: Vec<String>,
    #[serde(default, deserialize_with = "super::nullable_list")]
    pub programming_tags: Vec<String>,
    /// Image references (URLs or data URLs), at most [`MAX_IMAGES`].
    #[serde(default, deserialize_with = "super::nullable_list")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<Developer>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub liked_by_user: bool,
    #[serde(default)]
    pub starred_by_user: bool,
    #[serde(default)]
    pub saved_by_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Project {
    /// Display name of the owner, `"Unknown Developer"` when the summary is missing.
    pub fn developer_name(&self) -> String {
        self.developer
            .as_ref()
            .map(Developer::display_name)
            .unwrap_or_else(|| "Unknown Developer".to_string())
    }

    /// Owner username, empty when the summary is missing.
    pub fn developer_username(&self) -> &str {
        self.developer
            .as_ref()
            .map(|d| d.username.as_str())
            .unwrap_or("")
    }

    /// First image, used as the card cover.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// General and programming tags, general first.
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.general_tags
            .iter()
            .chain(self.programming_tags.iter())
            .map(String::as_str)
    }

    /// `/dev/{username}/{code}` when both parts are known.
    pub fn detail_path(&self) -> Option<String> {
        let username = self.developer_username();
        if username.is_empty() || self.code.is_empty() {
            return None;
        }
        Some(format!("/dev/{username}/{}", self.code))
    }
}
