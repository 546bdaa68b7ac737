use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Root {}, class: "btn btn-primary", "Go home" }
        }
    }
}
