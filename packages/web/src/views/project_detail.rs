use api::Project;
use dioxus::prelude::*;
use ui::{use_api, ProjectCard};

use crate::Route;

#[component]
pub fn ProjectDetail(username: String, code: String) -> Element {
    // Track route params in a signal so use_resource re-runs on change
    let mut key = use_signal(|| (username.clone(), code.clone()));
    if *key.peek() != (username.clone(), code.clone()) {
        key.set((username.clone(), code.clone()));
    }

    let client = use_api();
    let mut project = use_signal(|| Option::<Project>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || {
        let client = client.clone();
        let (username, code) = key();
        async move {
            match client.fetch_project_detail(&username, &code).await {
                Ok(loaded) => {
                    project.set(Some(loaded));
                    error.set(None);
                }
                Err(e) => {
                    project.set(None);
                    error.set(Some(e.to_string()));
                }
            }
        }
    });

    rsx! {
        div {
            class: "project-detail-page",
            Link {
                to: Route::DeveloperProfile { username: username.clone() },
                class: "back-link",
                "← @{username}"
            }

            if let Some(detail) = project() {
                ProjectCard {
                    project: detail.clone(),
                    on_refetch: move |_| loader.restart(),
                }
                if detail.images.len() > 1 {
                    div {
                        class: "project-gallery",
                        for (i, src) in detail.images.iter().enumerate().skip(1) {
                            img { key: "{i}", src: "{src}", alt: "{detail.name} image {i + 1}" }
                        }
                    }
                }
                if let Some(created) = &detail.created_at {
                    p { class: "project-created", "Posted {created}" }
                }
            } else if let Some(err) = error() {
                div { class: "page-error", "{err}" }
            } else {
                div { class: "page-loading", "Loading project..." }
            }
        }
    }
}
