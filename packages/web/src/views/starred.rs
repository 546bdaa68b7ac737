use api::Project;
use dioxus::prelude::*;
use ui::{use_api, ProjectCard};

/// Projects the user has starred.
///
/// There is no dedicated endpoint; the full feed is filtered on
/// `starred_by_user`.
#[component]
pub fn Starred() -> Element {
    let client = use_api();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_projects().await {
                Ok(list) => {
                    projects.set(list.into_iter().filter(|p| p.starred_by_user).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            class: "starred-page",
            header {
                class: "page-header",
                h1 { "Starred projects" }
            }

            if loading() {
                div { class: "page-loading", "Loading starred projects..." }
            } else if let Some(err) = error() {
                div { class: "page-error", "{err}" }
            } else if projects.read().is_empty() {
                div { class: "empty-state", "You haven't starred any projects yet." }
            } else {
                div {
                    class: "project-grid",
                    for project in projects() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project,
                            on_refetch: move |_| loader.restart(),
                        }
                    }
                }
            }
        }
    }
}
