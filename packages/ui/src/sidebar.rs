use dioxus::prelude::*;

use crate::icons::{FaBell, FaBookmark, FaCompass, FaHouse, FaPlus, FaStar, FaUser};
use crate::{use_auth, use_unread_count, Avatar, Icon, LogoutButton};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Whether the nav entry for `item` is highlighted at `current`.
fn is_active(item: &str, current: &str) -> bool {
    current == item || current.starts_with(&format!("{item}/"))
}

/// One sidebar entry; `children` is the icon.
#[component]
fn NavItem(
    to: String,
    label: String,
    active: bool,
    #[props(default)] badge: usize,
    children: Element,
) -> Element {
    rsx! {
        Link {
            to: to,
            class: if active { "nav-item active" } else { "nav-item" },
            span {
                class: "nav-icon",
                {children}
                if badge > 0 {
                    span { class: "nav-badge", "{badge}" }
                }
            }
            span { class: "nav-label", "{label}" }
        }
    }
}

/// Left navigation for logged-in pages.
#[component]
pub fn AppSidebar(
    /// Current route path, e.g. `"/browse"`.
    active_path: String,
) -> Element {
    let session = use_auth();
    let user = session().user().cloned();
    let unread = use_unread_count();

    let profile_path = user
        .as_ref()
        .map(|u| format!("/dev/{}", u.username))
        .unwrap_or_else(|| "/home".to_string());
    let at = |path: &str| is_active(path, &active_path);
    // Other developers' pages highlight nothing

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "sidebar",

            Link { to: "/home", class: "sidebar-logo", "Devfolio" }

            div {
                class: "sidebar-nav",
                NavItem { to: "/home", label: "Home", active: at("/home"),
                    Icon { icon: FaHouse, width: 20, height: 20 }
                }
                NavItem { to: "/browse", label: "Browse ideas", active: at("/browse"),
                    Icon { icon: FaCompass, width: 20, height: 20 }
                }
                NavItem { to: "/notifications", label: "Notifications", active: at("/notifications"), badge: unread(),
                    Icon { icon: FaBell, width: 20, height: 20 }
                }
                NavItem { to: "/saved", label: "Saved", active: at("/saved"),
                    Icon { icon: FaBookmark, width: 20, height: 20 }
                }
                NavItem { to: "/starred", label: "Starred", active: at("/starred"),
                    Icon { icon: FaStar, width: 20, height: 20 }
                }
                NavItem { to: "/projects/new", label: "New project", active: at("/projects/new"),
                    Icon { icon: FaPlus, width: 20, height: 20 }
                }
                NavItem { to: profile_path.clone(), label: "Profile", active: active_path == profile_path,
                    Icon { icon: FaUser, width: 20, height: 20 }
                }
            }

            div {
                class: "sidebar-bottom",
                if let Some(u) = user {
                    Link {
                        to: profile_path.clone(),
                        class: "sidebar-user",
                        Avatar { developer: u.as_developer(), class: "sidebar-user-avatar" }
                        div {
                            class: "sidebar-user-info",
                            span { class: "sidebar-user-name", "{u.display_name()}" }
                            span { class: "sidebar-user-handle", "@{u.username}" }
                        }
                    }
                }
                LogoutButton { label: "Log out", class: "sidebar-logout" }
            }
        }
    }
}
