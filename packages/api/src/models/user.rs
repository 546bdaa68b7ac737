//! # User models
//!
//! Three shapes of a Devfolio user cross the wire:
//!
//! ## [`User`]
//!
//! The full account as returned by `/login`, `/signup`, `/profile/update` and
//! `/dev/{username}`. Every profile field except `username` and `email` is
//! optional on the backend and arrives either missing, `null`, or as an empty
//! string. All three are modelled as [`Option<String>`] and normalised by the
//! accessors, so components never branch on `""` themselves.
//!
//! ## [`Profile`]
//!
//! `GET /dev/{username}` returns the user with a `projects` array flattened in
//! next to the profile fields.
//!
//! ## [`Developer`]
//!
//! The summary embedded in every project (`project.developer`). Older payloads
//! carry a single `name` instead of `first_name` / `last_name`.
//!
//! ## Display fallback order
//!
//! [`Developer::display_name`] (and [`User::display_name`], which delegates to
//! it) resolves, in order:
//!
//! 1. `"{first_name} {last_name}"` when both are non-empty
//! 2. `name` when non-empty
//! 3. `username` when non-empty
//! 4. `"Unknown Developer"`
//!
//! [`Developer::initial`] uses the first character of `first_name`, then
//! `username`, then `'?'`, upper-cased.

use serde::{Deserialize, Serialize};

use super::project::Project;

/// Returns the value when present and not blank.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Full user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// Follower count.
    #[serde(default)]
    pub followers: u64,
    /// Following count.
    #[serde(default)]
    pub following: u64,
}

impl User {
    /// The embedded-summary view of this user.
    pub fn as_developer(&self) -> Developer {
        Developer {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            name: None,
            profile_picture: self.profile_picture.clone(),
        }
    }

    /// Human-friendly name; see the module docs for the fallback order.
    pub fn display_name(&self) -> String {
        self.as_developer().display_name()
    }

    /// Upper-cased avatar initial.
    pub fn initial(&self) -> char {
        self.as_developer().initial()
    }

    pub fn bio(&self) -> Option<&str> {
        non_empty(&self.bio)
    }

    pub fn profile_picture(&self) -> Option<&str> {
        non_empty(&self.profile_picture)
    }

    pub fn banner(&self) -> Option<&str> {
        non_empty(&self.banner)
    }

    pub fn company_name(&self) -> Option<&str> {
        non_empty(&self.company_name)
    }

    /// External links that are set, labelled for display.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", &self.github_link),
            ("Portfolio", &self.portfolio_link),
            ("LinkedIn", &self.linkedin_link),
        ]
        .into_iter()
        .filter_map(|(label, value)| non_empty(value).map(|v| (label, v)))
        .collect()
    }
}

/// `GET /dev/{username}` payload: the user plus their projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub projects: Vec<Project>,
}

/// Developer summary embedded in projects and notifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl Developer {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// Human-friendly name; see the module docs for the fallback order.
    pub fn display_name(&self) -> String {
        if let (Some(first), Some(last)) = (non_empty(&self.first_name), non_empty(&self.last_name)) {
            return format!("{first} {last}");
        }
        if let Some(name) = non_empty(&self.name) {
            return name.to_string();
        }
        let username = self.username.trim();
        if !username.is_empty() {
            return username.to_string();
        }
        "Unknown Developer".to_string()
    }

    /// Upper-cased avatar initial.
    pub fn initial(&self) -> char {
        non_empty(&self.first_name)
            .or_else(|| Some(self.username.trim()).filter(|u| !u.is_empty()))
            .and_then(|s| s.chars().next())
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }

    pub fn profile_picture(&self) -> Option<&str> {
        non_empty(&self.profile_picture)
    }
}
