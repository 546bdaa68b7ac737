use api::feed::{result_label, FeedQuery, SortMode, StatusFilter};
use api::Project;
use dioxus::prelude::*;
use ui::{use_api, ProjectCard};

/// All projects with text search, status filter and sorting.
#[component]
pub fn Browse() -> Element {
    let client = use_api();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut query = use_signal(FeedQuery::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_projects().await {
                Ok(list) => {
                    projects.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    let q = query();
    let visible = q.apply(&projects());

    rsx! {
        div {
            class: "browse-page",
            header {
                class: "page-header",
                h1 { "Browse ideas" }
            }

            div {
                class: "filters",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search projects or developers...",
                    value: "{q.text}",
                    oninput: move |evt: FormEvent| query.write().text = evt.value(),
                }
                select {
                    class: "filter-select",
                    value: "{q.status.key()}",
                    onchange: move |evt: FormEvent| {
                        query.write().status = StatusFilter::from_key(&evt.value());
                    },
                    for status in StatusFilter::ALL {
                        option { key: "{status.key()}", value: "{status.key()}", "{status.label()}" }
                    }
                }
                select {
                    class: "filter-select",
                    value: "{q.sort.key()}",
                    onchange: move |evt: FormEvent| query.write().sort = SortMode::from_key(&evt.value()),
                    for sort in SortMode::ALL {
                        option { key: "{sort.key()}", value: "{sort.key()}", "{sort.label()}" }
                    }
                }
                if !q.is_default() {
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| query.write().clear(),
                        "Clear Filters"
                    }
                }
            }

            if loading() {
                div { class: "page-loading", "Loading projects..." }
            } else if let Some(err) = error() {
                div { class: "page-error", "{err}" }
            } else {
                p { class: "result-count", "{result_label(visible.len())}" }
                if visible.is_empty() {
                    div { class: "empty-state", "No projects match your filters." }
                } else {
                    div {
                        class: "project-grid",
                        for project in visible {
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
}
