//! Route guard policy.
//!
//! Pure decisions over [`SessionStatus`]; the router layouts call
//! [`Guard::decide`] on every session change and act on the result.

use super::session::SessionStatus;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";

/// Which kind of route is being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Requires a logged-in user.
    Protected,
    /// Only for visitors: login and signup.
    PublicOnly,
}

/// Where a redirect goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

impl Redirect {
    pub fn path(self) -> &'static str {
        match self {
            Redirect::Login => LOGIN_PATH,
            Redirect::Home => HOME_PATH,
        }
    }
}

/// What the guarded route should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading: show a neutral placeholder.
    Placeholder,
    Render,
    Redirect(Redirect),
}

impl Guard {
    pub fn decide(self, status: SessionStatus) -> GuardDecision {
        match (self, status) {
            (Guard::Protected, SessionStatus::Loading) => GuardDecision::Placeholder,
            (Guard::Protected, SessionStatus::Anonymous) => {
                GuardDecision::Redirect(Redirect::Login)
            }
            (Guard::Protected, SessionStatus::Authenticated) => GuardDecision::Render,
            (Guard::PublicOnly, SessionStatus::Authenticated) => {
                GuardDecision::Redirect(Redirect::Home)
            }
            (Guard::PublicOnly, _) => GuardDecision::Render,
        }
    }
}

/// Where `/` sends the visitor.
pub fn landing(status: SessionStatus) -> Option<Redirect> {
    match status {
        SessionStatus::Loading => None,
        SessionStatus::Authenticated => Some(Redirect::Home),
        SessionStatus::Anonymous => Some(Redirect::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_route() {
        assert_eq!(
            Guard::Protected.decide(SessionStatus::Anonymous),
            GuardDecision::Redirect(Redirect::Login)
        );
        assert_eq!(
            Guard::Protected.decide(SessionStatus::Loading),
            GuardDecision::Placeholder
        );
        assert_eq!(
            Guard::Protected.decide(SessionStatus::Authenticated),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_public_only_route() {
        assert_eq!(
            Guard::PublicOnly.decide(SessionStatus::Authenticated),
            GuardDecision::Redirect(Redirect::Home)
        );
        assert_eq!(
            Guard::PublicOnly.decide(SessionStatus::Anonymous),
            GuardDecision::Render
        );
        assert_eq!(
            Guard::PublicOnly.decide(SessionStatus::Loading),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(Redirect::Login.path(), "/login");
        assert_eq!(Redirect::Home.path(), "/home");
        assert_eq!(landing(SessionStatus::Loading), None);
        assert_eq!(landing(SessionStatus::Anonymous), Some(Redirect::Login));
    }
}
