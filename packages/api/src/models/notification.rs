//! Notifications.
//!
//! The backend has no notifications endpoint yet, so the view renders the
//! fixed sample feed from [`Notification::samples`]. Filtering and the
//! mark-all-read action are local.

use serde::{Deserialize, Serialize};

use super::user::Developer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Star,
    Follow,
    Comment,
}

impl NotificationKind {
    /// Sentence fragment following the actor's name.
    pub fn verb(self) -> &'static str {
        match self {
            NotificationKind::Like => "liked your project",
            NotificationKind::Star => "starred your project",
            NotificationKind::Follow => "started following you",
            NotificationKind::Comment => "commented on your project",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Like => "like",
            NotificationKind::Star => "star",
            NotificationKind::Follow => "follow",
            NotificationKind::Comment => "comment",
        }
    }
}

/// Project a notification refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub actor: Developer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Relative, human-readable time ("2 minutes ago").
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

/// Tabs on the notifications view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
}

impl NotificationFilter {
    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.read,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationFilter::All => "All",
            NotificationFilter::Unread => "Unread",
        }
    }
}

/// Notifications passing `filter`, in feed order.
pub fn filter_notifications(
    notifications: &[Notification],
    filter: NotificationFilter,
) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|n| filter.matches(n))
        .cloned()
        .collect()
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

pub fn mark_all_read(notifications: &mut [Notification]) {
    for n in notifications {
        n.read = true;
    }
}

fn actor(username: &str, name: &str) -> Developer {
    Developer {
        name: Some(name.to_string()),
        ..Developer::new(username)
    }
}

fn sample(
    id: i64,
    kind: NotificationKind,
    who: (&str, &str),
    project: Option<(i64, &str)>,
    timestamp: &str,
    read: bool,
) -> Notification {
    Notification {
        id,
        kind,
        actor: actor(who.0, who.1),
        project: project.map(|(id, name)| ProjectRef {
            id,
            name: name.to_string(),
        }),
        comment: None,
        timestamp: timestamp.to_string(),
        read,
    }
}

impl Notification {
    /// The fixed sample feed shown until the backend grows a notifications API.
    pub fn samples() -> Vec<Notification> {
        use NotificationKind::*;

        let mut comment = sample(
            4,
            Comment,
            ("sarah_wilson", "Sarah Wilson"),
            Some((3, "Task Management App")),
            "3 hours ago",
            true,
        );
        comment.comment = Some("This looks amazing! Great work!".to_string());

        vec![
            sample(1, Like, ("john_doe", "John Doe"), Some((1, "E-Commerce Platform")), "2 minutes ago", false),
            sample(2, Star, ("jane_smith", "Jane Smith"), Some((2, "Social Media Dashboard")), "15 minutes ago", false),
            sample(3, Follow, ("alex_dev", "Alex Developer"), None, "1 hour ago", false),
            comment,
            sample(5, Like, ("mike_brown", "Mike Brown"), Some((5, "Learning Management System")), "5 hours ago", true),
            sample(6, Star, ("ai_dev", "AI Developer"), Some((6, "AI Chat Assistant")), "1 day ago", true),
            sample(7, Follow, ("crypto_master", "Crypto Master"), None, "2 days ago", true),
            sample(8, Like, ("music_dev", "Music Dev"), Some((8, "Music Streaming App")), "3 days ago", true),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_have_three_unread() {
        let samples = Notification::samples();
        assert_eq!(samples.len(), 8);
        assert_eq!(unread_count(&samples), 3);
        assert!(samples.iter().filter(|n| n.kind == NotificationKind::Follow).all(|n| n.project.is_none()));
    }

    #[test]
    fn test_unread_filter() {
        let samples = Notification::samples();
        let unread = filter_notifications(&samples, NotificationFilter::Unread);
        assert_eq!(unread.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(filter_notifications(&samples, NotificationFilter::All).len(), 8);
    }

    #[test]
    fn test_mark_all_read() {
        let mut samples = Notification::samples();
        mark_all_read(&mut samples);
        assert_eq!(unread_count(&samples), 0);
        assert!(filter_notifications(&samples, NotificationFilter::Unread).is_empty());
    }

    #[test]
    fn test_kind_wire_format() {
        assert_eq!(serde_json::to_string(&NotificationKind::Follow).unwrap(), r#""follow""#);
        assert_eq!(NotificationKind::Comment.verb(), "commented on your project");
    }
}
