use api::feed::trending;
use api::{format_number, Project};
use dioxus::prelude::*;

use crate::icons::{FaFire, FaHeart};
use crate::Icon;

/// Ranked sidebar of the most liked projects in `projects`.
#[component]
pub fn TrendingProjects(projects: Vec<Project>, #[props(default = 5)] limit: usize) -> Element {
    let ranked = trending(&projects, limit);
    if ranked.is_empty() {
        return rsx! {};
    }

    rsx! {
        aside {
            class: "trending",
            h2 {
                class: "trending-title",
                Icon { icon: FaFire, width: 16, height: 16 }
                "Trending"
            }
            ol {
                class: "trending-list",
                for (rank, project) in ranked.into_iter().enumerate() {
                    li {
                        key: "{project.id}",
                        class: "trending-item",
                        span { class: "trending-rank", "{rank + 1}" }
                        div {
                            class: "trending-body",
                            if let Some(path) = project.detail_path() {
                                Link { to: path, class: "trending-name", "{project.name}" }
                            } else {
                                span { class: "trending-name", "{project.name}" }
                            }
                            span { class: "trending-developer", "{project.developer_name()}" }
                        }
                        span {
                            class: "trending-likes",
                            Icon { icon: FaHeart, width: 12, height: 12 }
                            "{format_number(project.likes)}"
                        }
                    }
                }
            }
        }
    }
}
