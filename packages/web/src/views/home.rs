use api::Project;
use dioxus::prelude::*;
use ui::{use_api, ProjectCard, TrendingProjects};

use crate::Route;

/// Swipe deck over the project feed, one card at a time, with the most
/// liked projects ranked alongside.
#[component]
pub fn Home() -> Element {
    let client = use_api();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut index = use_signal(|| 0usize);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_projects().await {
                Ok(list) => {
                    if *index.peek() >= list.len() {
                        index.set(0);
                    }
                    projects.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!("Loading feed failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    // Accept and reject both move on; the deck wraps around
    let mut advance = move || {
        let len = projects.peek().len();
        if len > 0 {
            let next = (*index.peek() + 1) % len;
            index.set(next);
        }
    };

    let list = projects();
    let current = list.get(index()).cloned();

    rsx! {
        div {
            class: "home-page",
            header {
                class: "page-header",
                h1 { "Discover projects" }
                if !list.is_empty() {
                    span { class: "deck-position", "{index() + 1} / {list.len()}" }
                }
            }

            if loading() {
                div { class: "page-loading", "Loading projects..." }
            } else if let Some(err) = error() {
                div { class: "page-error", "{err}" }
            } else if let Some(project) = current {
                div {
                    class: "home-layout",
                    div {
                        class: "deck",
                        ProjectCard {
                            key: "{project.id}",
                            project: project,
                            on_accept: move |_| advance(),
                            on_reject: move |_| advance(),
                            on_refetch: move |_| loader.restart(),
                        }
                    }
                    TrendingProjects { projects: list.clone(), limit: 5 }
                }
            } else {
                div {
                    class: "empty-state",
                    p { "No projects yet." }
                    Link { to: Route::CreateProject {}, class: "btn btn-primary", "Share the first one" }
                }
            }
        }
    }
}
