use api::models::{
    filter_notifications, mark_all_read, unread_count, NotificationFilter, NotificationKind,
};
use dioxus::prelude::*;
use ui::icons::{FaBell, FaComment, FaHeart, FaStar, FaUserPlus};
use ui::{use_notifications, Avatar, Icon};

use crate::Route;

#[component]
fn KindIcon(kind: NotificationKind) -> Element {
    rsx! {
        span {
            class: "notification-kind kind-{kind.as_str()}",
            {match kind {
                NotificationKind::Like => rsx! { Icon { icon: FaHeart, width: 14, height: 14 } },
                NotificationKind::Star => rsx! { Icon { icon: FaStar, width: 14, height: 14 } },
                NotificationKind::Follow => rsx! { Icon { icon: FaUserPlus, width: 14, height: 14 } },
                NotificationKind::Comment => rsx! { Icon { icon: FaComment, width: 14, height: 14 } },
            }}
        }
    }
}

/// Activity on the user's projects. Read state is shared with the sidebar badge.
#[component]
pub fn Notifications() -> Element {
    let mut notifications = use_notifications();
    let mut filter = use_signal(NotificationFilter::default);

    let all = notifications();
    let unread = unread_count(&all);
    let visible = filter_notifications(&all, filter());

    rsx! {
        div {
            class: "notifications-page",
            header {
                class: "page-header",
                h1 { "Notifications" }
                if unread > 0 {
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| mark_all_read(&mut notifications.write()),
                        "Mark all as read"
                    }
                }
            }

            div {
                class: "tabs",
                for tab in [NotificationFilter::All, NotificationFilter::Unread] {
                    button {
                        key: "{tab.label()}",
                        class: if filter() == tab { "tab active" } else { "tab" },
                        onclick: move |_| filter.set(tab),
                        "{tab.label()}"
                        if tab == NotificationFilter::Unread && unread > 0 {
                            span { class: "tab-count", "{unread}" }
                        }
                    }
                }
            }

            if visible.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaBell, width: 32, height: 32 }
                    p { "You're all caught up." }
                }
            } else {
                ul {
                    class: "notification-list",
                    for n in visible {
                        li {
                            key: "{n.id}",
                            class: if n.read { "notification" } else { "notification unread" },
                            Link {
                                to: Route::DeveloperProfile { username: n.actor.username.clone() },
                                Avatar { developer: n.actor.clone() }
                            }
                            KindIcon { kind: n.kind }
                            div {
                                class: "notification-body",
                                p {
                                    strong { "{n.actor.display_name()}" }
                                    " {n.kind.verb()}"
                                    if let Some(project) = &n.project {
                                        " "
                                        em { "{project.name}" }
                                    }
                                }
                                if let Some(comment) = &n.comment {
                                    p { class: "notification-comment", "\"{comment}\"" }
                                }
                                span { class: "notification-time", "{n.timestamp}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
