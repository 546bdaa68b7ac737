//! # API crate — Devfolio backend client and client-side domain logic
//!
//! Everything the web frontend knows about the Devfolio backend lives here,
//! kept free of UI code so it can be tested natively against an in-process
//! server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`Session`] state machine, [`SessionStore`] operations and the route guard policy |
//! | [`client`] | [`ApiClient`]: one method per backend endpoint, bearer token from the session vault |
//! | [`error`] | [`ApiError`], shown inline by views |
//! | [`feed`] | Browse page text/status filter and likes/stars sorting |
//! | [`format`] | `1.5K` / `2M` counters |
//! | [`forms`] | Signup, new project and multipart profile update builders |
//! | [`models`] | Wire models: users, projects, follow status, notifications |
//! | [`reactions`] | Optimistic like/star/save/follow toggles with rollback |
//!
//! ## Session flow
//!
//! - **Startup**: [`SessionStore::restore`] reads the vault, then
//!   [`SessionStore::validate`] confirms the token in the background
//! - **Login / signup**: [`SessionStore::authenticate`], [`SessionStore::register`]
//! - **Logout**: [`SessionStore::end_session`] always ends anonymous, even offline

pub mod auth;
pub mod client;
pub mod error;
pub mod feed;
pub mod format;
pub mod forms;
pub mod models;
pub mod reactions;

#[cfg(test)]
mod test_support;

pub use auth::{Guard, GuardDecision, Redirect, Session, SessionStatus, SessionStore};
pub use client::ApiClient;
pub use error::ApiError;
pub use format::format_number;
pub use models::{Developer, Profile, Project, ProjectStatus, User};

pub use store::{DevfolioConfig, SessionVault};
