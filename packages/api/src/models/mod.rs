//! Wire models for the Devfolio REST API.

mod notification;
mod project;
mod user;

use serde::{Deserialize, Deserializer, Serialize};

pub use notification::{
    filter_notifications, mark_all_read, unread_count, Notification, NotificationFilter,
    NotificationKind, ProjectRef,
};
pub use project::{Project, ProjectStatus, MAX_IMAGES};
pub use user::{Developer, Profile, User};

/// `/login` and `/signup` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
    pub user: User,
}

/// `/login` request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `{"message": "..."}` acknowledgement returned by mutation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message: String,
}

/// `GET /users/{username}/follow/status` response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowStatus {
    #[serde(default)]
    pub following: bool,
}

/// `null` or a missing array decodes as empty.
pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`nullable_vec`] for string lists, also dropping blank entries the
/// backend produces when it splits an empty column.
pub(crate) fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(nullable_vec::<D, String>(deserializer)?
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"token":"abc.def","user":{"id":1,"username":"ada","email":"a@x.io","followers":0,"following":0}}"#,
        )
        .unwrap();
        assert_eq!(resp.token, "abc.def");
        assert_eq!(resp.user.username, "ada");
    }

    #[test]
    fn test_follow_status_defaults_false() {
        let status: FollowStatus = serde_json::from_str("{}").unwrap();
        assert!(!status.following);
    }
}
