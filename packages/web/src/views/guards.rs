//! Route layouts that gate their children on the session.

use api::auth::{Guard, GuardDecision};
use dioxus::prelude::*;
use ui::{use_auth, AppSidebar};

use crate::Route;

/// Apply `guard` whenever the session changes.
fn use_guard(guard: Guard) -> GuardDecision {
    let session = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let GuardDecision::Redirect(to) = guard.decide(session().status()) {
            tracing::debug!("{guard:?} route redirecting to {}", to.path());
            nav.replace(to.path());
        }
    });

    guard.decide(session().status())
}

/// Logged-in pages: sidebar plus the routed view.
#[component]
pub fn ProtectedLayout() -> Element {
    let route = use_route::<Route>();

    match use_guard(Guard::Protected) {
        GuardDecision::Render => rsx! {
            div {
                class: "app-shell",
                AppSidebar { active_path: route.to_string() }
                main {
                    class: "app-main",
                    Outlet::<Route> {}
                }
            }
        },
        GuardDecision::Placeholder => rsx! {
            div { class: "route-loading", "Loading..." }
        },
        GuardDecision::Redirect(_) => rsx! {},
    }
}

/// Login and signup: only for visitors.
#[component]
pub fn PublicOnlyLayout() -> Element {
    match use_guard(Guard::PublicOnly) {
        GuardDecision::Redirect(_) => rsx! {},
        _ => rsx! {
            div {
                class: "auth-page",
                Outlet::<Route> {}
            }
        },
    }
}
