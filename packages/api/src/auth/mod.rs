//! Session state and route guard policy.

mod guard;
mod session;

pub use guard::{landing, Guard, GuardDecision, Redirect, HOME_PATH, LOGIN_PATH};
pub use session::{Session, SessionStatus, SessionStore};
