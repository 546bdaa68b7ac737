use api::Developer;
use dioxus::prelude::*;

/// Round profile picture, or the upper-cased initial when there is none.
#[component]
pub fn Avatar(
    developer: Developer,
    #[props(default = "avatar".to_string())] class: String,
) -> Element {
    let name = developer.display_name();
    rsx! {
        if let Some(src) = developer.profile_picture() {
            img { class: "{class}", src: "{src}", alt: "{name}" }
        } else {
            div {
                class: "{class} avatar-placeholder",
                span { "{developer.initial()}" }
            }
        }
    }
}
