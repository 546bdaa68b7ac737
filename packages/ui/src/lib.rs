//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

mod vault;
pub use vault::{make_session_store, make_vault};

mod auth;
pub use auth::{use_api, use_auth, use_session_store, AuthProvider, LogoutButton};

mod notifications;
pub use notifications::{use_notifications, use_unread_count, NotificationsProvider};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod avatar;
pub use avatar::Avatar;

pub mod files;

mod project_card;
pub use project_card::{ProjectCard, StatusBadge};

mod trending;
pub use trending::TrendingProjects;

mod follow_button;
pub use follow_button::FollowButton;

mod sidebar;
pub use sidebar::AppSidebar;

mod edit_profile_modal;
pub use edit_profile_modal::EditProfileModal;
