//! Project card with like, star and save toggles.

use api::reactions::{Optimistic, Reaction, Reconcile};
use api::{format_number, Project};
use dioxus::prelude::*;

use crate::icons::{FaBookmark, FaCheck, FaHeart, FaStar, FaXmark};
use crate::{use_api, Avatar, Icon};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Swipe {
    Left,
    Right,
}

async fn swipe_delay() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(300)).await;
}

/// Local reactions always toggle; a server-backed one waits for the request
/// already in flight.
fn accepts_toggle(reaction: Reaction, busy: bool) -> bool {
    !(busy && reaction.is_persisted())
}

/// Status pill, coloured by status slug.
#[component]
pub fn StatusBadge(status: api::ProjectStatus) -> Element {
    rsx! {
        span { class: "project-status status-{status.slug()}", "{status}" }
    }
}

/// A project as shown in the home deck and the browse grid.
///
/// Like and star are local only. Save is sent to the backend; when it fails
/// the card rolls back and `on_refetch` is called so the parent can reload.
/// `on_accept` / `on_reject` add the swipe buttons used by the home deck.
#[component]
pub fn ProjectCard(
    project: Project,
    #[props(default)] on_accept: Option<EventHandler<()>>,
    #[props(default)] on_reject: Option<EventHandler<()>>,
    #[props(default)] on_refetch: Option<EventHandler<()>>,
    /// Called with the project id once the backend confirms an unsave.
    #[props(default)]
    on_unsaved: Option<EventHandler<i64>>,
) -> Element {
    // Local copy for optimistic updates, reset when the parent sends new data
    let mut seen = use_signal(|| project.clone());
    let mut local = use_signal(|| project.clone());
    if *seen.peek() != project {
        seen.set(project.clone());
        local.set(project.clone());
    }

    let mut swipe = use_signal(|| Option::<Swipe>::None);
    // Save request in flight
    let mut busy = use_signal(|| false);
    let client = use_api();

    let toggle = use_callback(move |reaction: Reaction| {
        if !accepts_toggle(reaction, *busy.peek()) {
            return;
        }
        let pending = Optimistic::begin(reaction, reaction.read(&local.peek()));
        reaction.write(&mut local.write(), pending.current());
        if !reaction.is_persisted() {
            return;
        }

        busy.set(true);
        let client = client.clone();
        let id = local.peek().id;
        spawn(async move {
            let outcome = if pending.current().active {
                client.save_project(id).await
            } else {
                client.unsave_project(id).await
            };
            let (state, reconcile) = pending.settle(&outcome);
            reaction.write(&mut local.write(), state);
            busy.set(false);
            match reconcile {
                Reconcile::Refetch => {
                    if let Some(handler) = on_refetch {
                        handler.call(());
                    }
                }
                Reconcile::None if !state.active => {
                    if let Some(handler) = on_unsaved {
                        handler.call(id);
                    }
                }
                _ => {}
            }
        });
    });

    let mut start_swipe = move |direction: Swipe| {
        if swipe.peek().is_some() {
            return;
        }
        swipe.set(Some(direction));
        spawn(async move {
            swipe_delay().await;
            swipe.set(None);
            let handler = match direction {
                Swipe::Left => on_reject,
                Swipe::Right => on_accept,
            };
            if let Some(handler) = handler {
                handler.call(());
            }
        });
    };

    let p = local();
    let developer = p.developer.clone().unwrap_or_default();
    let developer_name = p.developer_name();
    let swipe_class = match swipe() {
        Some(Swipe::Left) => "swipe-left",
        Some(Swipe::Right) => "swipe-right",
        None => "",
    };
    let is_deck = on_accept.is_some() || on_reject.is_some();

    rsx! {
        div {
            class: "project-card-wrapper",

            if is_deck {
                button {
                    class: "action-button reject-button",
                    aria_label: "Reject",
                    onclick: move |_| start_swipe(Swipe::Left),
                    Icon { icon: FaXmark, width: 20, height: 20 }
                }
            }

            div {
                class: "project-card {swipe_class}",

                div {
                    class: "project-image-container",
                    if let Some(cover) = p.cover_image() {
                        img { class: "project-image", src: "{cover}", alt: "{p.name}" }
                    } else {
                        div { class: "project-image-placeholder", span { "Project Image" } }
                    }
                    div {
                        class: "developer-pfp-container",
                        Avatar { developer: developer.clone(), class: "developer-pfp" }
                    }
                }

                div {
                    class: "project-content",
                    div {
                        class: "project-header",
                        div {
                            class: "project-title-section",
                            div {
                                class: "project-title-row",
                                if let Some(path) = p.detail_path() {
                                    Link { to: path, class: "project-name", "{p.name}" }
                                } else {
                                    h3 { class: "project-name", "{p.name}" }
                                }
                                StatusBadge { status: p.status.clone() }
                            }
                            if developer.username.is_empty() {
                                span { class: "project-developer", "by {developer_name}" }
                            } else {
                                Link {
                                    to: format!("/dev/{}", developer.username),
                                    class: "project-developer",
                                    "by {developer_name}"
                                }
                            }
                        }
                        div {
                            class: "header-buttons-group",
                            button {
                                class: if p.liked_by_user { "like-button liked" } else { "like-button" },
                                aria_label: "Like it",
                                onclick: move |_| toggle.call(Reaction::Like),
                                Icon { icon: FaHeart, width: 18, height: 18 }
                                span { class: "like-text", "Like it" }
                            }
                            button {
                                class: if p.starred_by_user { "star-button starred" } else { "star-button" },
                                aria_label: "Star it",
                                onclick: move |_| toggle.call(Reaction::Star),
                                Icon { icon: FaStar, width: 18, height: 18 }
                                span { class: "star-text", "Star it" }
                            }
                            button {
                                class: if p.saved_by_user { "save-button saved" } else { "save-button" },
                                aria_label: if p.saved_by_user { "Unsave" } else { "Save" },
                                disabled: busy(),
                                onclick: move |_| toggle.call(Reaction::Save),
                                Icon { icon: FaBookmark, width: 18, height: 18 }
                            }
                        }
                    }

                    p { class: "project-description", "{p.description}" }

                    if !p.general_tags.is_empty() {
                        div {
                            class: "tags-section",
                            h4 { class: "tags-label", "General tags" }
                            div {
                                class: "tags-container",
                                for tag in p.general_tags.iter() {
                                    span { key: "{tag}", class: "tag general-tag", "{tag}" }
                                }
                            }
                        }
                    }
                    if !p.programming_tags.is_empty() {
                        div {
                            class: "tags-section",
                            h4 { class: "tags-label", "Programming tags" }
                            div {
                                class: "tags-container",
                                for tag in p.programming_tags.iter() {
                                    span { key: "{tag}", class: "tag programming-tag", "{tag}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "project-actions",
                    span {
                        class: "likes-count",
                        Icon { icon: FaHeart, width: 14, height: 14 }
                        "{format_number(p.likes)}"
                    }
                    span {
                        class: "stars-count",
                        Icon { icon: FaStar, width: 14, height: 14 }
                        "{format_number(p.stars)}"
                    }
                }
            }

            if is_deck {
                button {
                    class: "action-button accept-button",
                    aria_label: "Accept",
                    onclick: move |_| start_swipe(Swipe::Right),
                    Icon { icon: FaCheck, width: 20, height: 20 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_waits_for_request_in_flight() {
        assert!(accepts_toggle(Reaction::Save, false));
        assert!(!accepts_toggle(Reaction::Save, true));
        assert!(accepts_toggle(Reaction::Like, true));
        assert!(accepts_toggle(Reaction::Star, true));
    }
}
