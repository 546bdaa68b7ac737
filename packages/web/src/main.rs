use dioxus::prelude::*;

use api::auth::landing;
use ui::{use_auth, AuthProvider, NotificationsProvider};
use views::{
    Browse, CreateProject, DeveloperProfile, Home, Login, NotFound, Notifications, ProjectDetail,
    ProtectedLayout, PublicOnlyLayout, Saved, Signup, Starred,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(PublicOnlyLayout)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
    #[end_layout]
    #[layout(ProtectedLayout)]
        #[route("/home")]
        Home {},
        #[route("/browse")]
        Browse {},
        #[route("/saved")]
        Saved {},
        #[route("/starred")]
        Starred {},
        #[route("/notifications")]
        Notifications {},
        #[route("/projects/new")]
        CreateProject {},
        #[route("/dev/:username")]
        DeveloperProfile { username: String },
        #[route("/dev/:username/:code")]
        ProjectDetail { username: String, code: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }

        AuthProvider {
            NotificationsProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/home` or `/login` once the session has settled.
#[component]
fn Root() -> Element {
    let session = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(to) = landing(session().status()) {
            nav.replace(to.path());
        }
    });

    rsx! {
        div { class: "route-loading", "Loading..." }
    }
}
