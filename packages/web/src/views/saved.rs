use api::Project;
use dioxus::prelude::*;
use ui::{use_api, ProjectCard};

use crate::Route;

/// Projects the user has saved.
#[component]
pub fn Saved() -> Element {
    let client = use_api();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_saved_projects().await {
                Ok(list) => {
                    projects.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    // Drop the card once the server confirmed the unsave
    let on_unsaved = move |id: i64| projects.write().retain(|p| p.id != id);

    rsx! {
        div {
            class: "saved-page",
            header {
                class: "page-header",
                h1 { "Saved projects" }
            }

            if loading() {
                div { class: "page-loading", "Loading saved projects..." }
            } else if let Some(err) = error() {
                div { class: "page-error", "{err}" }
            } else if projects.read().is_empty() {
                div {
                    class: "empty-state",
                    p { "Nothing saved yet." }
                    Link { to: Route::Browse {}, class: "btn btn-primary", "Browse ideas" }
                }
            } else {
                div {
                    class: "project-grid",
                    for project in projects() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project,
                            on_refetch: move |_| loader.restart(),
                            on_unsaved: on_unsaved,
                        }
                    }
                }
            }
        }
    }
}
