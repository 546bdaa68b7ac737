use api::reactions::ToggleState;
use api::{format_number, Profile};
use dioxus::prelude::*;
use ui::{use_api, use_auth, Avatar, EditProfileModal, FollowButton, ProjectCard};

use crate::Route;

/// A developer's profile header and projects.
///
/// Visitors get a follow button; the owner gets an edit button instead.
#[component]
pub fn DeveloperProfile(username: String) -> Element {
    // Track the username in a signal so use_resource re-runs on route param change
    let mut username_signal = use_signal(|| username.clone());
    if *username_signal.peek() != username {
        username_signal.set(username.clone());
    }

    let client = use_api();
    let session = use_auth();
    let mut profile = use_signal(|| Option::<Profile>::None);
    let mut following = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| false);

    let is_self = session().is_self(&username);

    let mut loader = use_resource(move || {
        let client = client.clone();
        let username = username_signal();
        async move {
            error.set(None);
            match client.fetch_profile(&username).await {
                Ok(loaded) => profile.set(Some(loaded)),
                Err(e) => {
                    profile.set(None);
                    error.set(Some(e.to_string()));
                    return;
                }
            }
            if session.peek().is_self(&username) {
                return;
            }
            match client.fetch_follow_status(&username).await {
                Ok(status) => following.set(status.following),
                Err(e) => tracing::warn!("Follow status for {username} unavailable: {e}"),
            }
        }
    });

    let on_follow_change = move |state: ToggleState| {
        following.set(state.active);
        if let Some(current) = profile.write().as_mut() {
            current.user.followers = state.count;
        }
    };

    let Some(page) = profile() else {
        return rsx! {
            div {
                class: "profile-page",
                if let Some(err) = error() {
                    div { class: "page-error", "{err}" }
                } else {
                    div { class: "page-loading", "Loading profile..." }
                }
            }
        };
    };
    let user = page.user.clone();

    rsx! {
        div {
            class: "profile-page",

            div {
                class: "profile-banner",
                if let Some(banner) = user.banner() {
                    img { src: "{banner}", alt: "Banner" }
                }
            }

            div {
                class: "profile-header",
                Avatar { developer: user.as_developer(), class: "profile-avatar" }
                div {
                    class: "profile-info",
                    h1 { "{user.display_name()}" }
                    span { class: "profile-handle", "@{user.username}" }
                    if let Some(company) = user.company_name() {
                        span { class: "profile-company", "{company}" }
                    }
                    if let Some(bio) = user.bio() {
                        p { class: "profile-bio", "{bio}" }
                    }
                    div {
                        class: "profile-stats",
                        span { strong { "{format_number(user.followers)}" } " followers" }
                        span { strong { "{format_number(user.following)}" } " following" }
                        span { strong { "{page.projects.len()}" } " projects" }
                    }
                    div {
                        class: "profile-links",
                        for (label, href) in user.links() {
                            a { key: "{label}", href: "{href}", target: "_blank", rel: "noopener", "{label}" }
                        }
                    }
                }
                div {
                    class: "profile-actions",
                    if is_self {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| editing.set(true),
                            "Edit profile"
                        }
                    } else {
                        FollowButton {
                            username: user.username.clone(),
                            following: following(),
                            followers: user.followers,
                            on_change: on_follow_change,
                            on_refetch: move |_| loader.restart(),
                        }
                    }
                }
            }

            section {
                class: "profile-projects",
                h2 { "Projects" }
                if page.projects.is_empty() {
                    div {
                        class: "empty-state",
                        if is_self {
                            p { "You haven't shared any projects yet." }
                            Link { to: Route::CreateProject {}, class: "btn btn-primary", "Share a project" }
                        } else {
                            p { "No projects yet." }
                        }
                    }
                } else {
                    div {
                        class: "project-grid",
                        for project in page.projects.clone() {
                            ProjectCard {
                                key: "{project.id}",
                                project: project,
                                on_refetch: move |_| loader.restart(),
                            }
                        }
                    }
                }
            }

            if editing() {
                EditProfileModal {
                    user: user.clone(),
                    on_close: move |_| editing.set(false),
                    on_saved: move |updated| {
                        if let Some(current) = profile.write().as_mut() {
                            current.user = updated;
                        }
                        editing.set(false);
                    },
                }
            }
        }
    }
}
