//! # Session store
//!
//! [`Session`] is the client's view of "who is logged in". It is a plain value:
//! the UI keeps one in a `Signal<Session>` and replaces it with whatever the
//! [`SessionStore`] operations return. No operation mutates a session in place
//! behind the caller's back.
//!
//! ## Lifecycle
//!
//! ```text
//!             restore()                       validate() ok
//!  startup ─────────────► Authenticated ───────────────────► (validated)
//!              │          (optimistic)
//!              │ nothing       │ validate() fails
//!              ▼ stored        ▼
//!          Anonymous ◄──── (vault cleared)
//!              │
//!              │ authenticate() / register()
//!              ▼
//!        Authenticated ── end_session() ──► Anonymous
//! ```
//!
//! A restored session is optimistic: it is [`SessionStatus::Authenticated`]
//! as soon as storage is read, with `is_validated()` false until `/validate`
//! answers. [`SessionStatus::Loading`] only covers the moment before storage
//! has been read.
//!
//! ## Late responses
//!
//! Validation runs in the background. If the user logs out and back in before
//! it finishes, the stale outcome must not touch the new session.
//! [`Session::apply_validation`] compares tokens and ignores mismatches, and
//! [`SessionStore::validate`] only wipes the vault if it still holds the token
//! that was rejected.

use store::{PersistedSession, SessionVault};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms::SignupForm;
use crate::models::User;

/// Derived state for route guards and views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Anonymous,
}

/// Current authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    loading: bool,
    validated: bool,
}

impl Session {
    /// No one is logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Initial state before storage has been read.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Restored from storage. Authenticated right away, awaiting `/validate`.
    pub fn restored(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            loading: false,
            validated: false,
        }
    }

    /// Freshly issued by `/login` or `/signup`.
    pub fn authenticated(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            loading: false,
            validated: true,
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Loading
        } else if self.token.is_some() && self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the backend has confirmed the token during this run.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// True when `username` is the logged-in user.
    pub fn is_self(&self, username: &str) -> bool {
        self.username() == Some(username)
    }

    /// Fold a validation outcome for `token` into this session.
    ///
    /// Returns `false` and leaves the session untouched when it no longer
    /// holds `token`.
    pub fn apply_validation(&mut self, token: &str, outcome: &Session) -> bool {
        if self.token.as_deref() != Some(token) {
            tracing::debug!("Discarding validation result for a replaced session");
            return false;
        }
        *self = outcome.clone();
        true
    }

    /// Replace the user snapshot, keeping the token and status.
    pub fn with_user(&self, user: User) -> Self {
        Self {
            user: Some(user),
            ..self.clone()
        }
    }
}

/// Operations that move a [`Session`] between states.
///
/// Cheap to clone; every clone talks to the same vault.
#[derive(Clone, Debug)]
pub struct SessionStore {
    client: ApiClient,
}

impl SessionStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn vault(&self) -> &SessionVault {
        self.client.vault()
    }

    /// Read the persisted session at startup.
    ///
    /// A half-written or unreadable pair is wiped and reported as anonymous.
    pub fn restore(&self) -> Session {
        match self.vault().load::<User>() {
            PersistedSession::Restored { token, user } => {
                tracing::info!("Restored session for {}", user.username);
                Session::restored(token, user)
            }
            PersistedSession::Empty => Session::anonymous(),
            PersistedSession::Damaged => {
                tracing::warn!("Discarding damaged persisted session");
                self.vault().clear();
                Session::anonymous()
            }
        }
    }

    /// Confirm a restored session with the backend.
    ///
    /// Any failure, including an unreachable server, ends the session. Fold the
    /// result back with [`Session::apply_validation`].
    pub async fn validate(&self, session: &Session) -> Session {
        let Some(token) = session.token() else {
            return Session::anonymous();
        };
        match self.client.validate_session().await {
            Ok(_) => Session {
                loading: false,
                validated: true,
                ..session.clone()
            },
            Err(e) => {
                tracing::warn!("{}: {e}", ApiError::SessionInvalid);
                if self.vault().token().as_deref() == Some(token) {
                    self.vault().clear();
                }
                Session::anonymous()
            }
        }
    }

    /// `POST /login`. On failure the caller keeps its current session.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let auth = self.client.authenticate(email.trim(), password).await?;
        tracing::info!("Logged in as {}", auth.user.username);
        Ok(Session::authenticated(auth.token, auth.user))
    }

    /// Validate the form, then `POST /signup`.
    pub async fn register(&self, form: &SignupForm) -> Result<Session, ApiError> {
        form.validate()?;
        let auth = self.client.register(&form.normalized()).await?;
        tracing::info!("Registered {}", auth.user.username);
        Ok(Session::authenticated(auth.token, auth.user))
    }

    /// Best-effort `POST /logout`, then forget the session locally no matter
    /// what the server said.
    pub async fn end_session(&self) -> Session {
        if let Err(e) = self.client.end_session().await {
            tracing::warn!("Logout request failed: {e}");
        }
        self.vault().clear();
        Session::anonymous()
    }

    /// Swap in an updated user after a profile edit and persist it.
    pub fn update_user(&self, session: &Session, user: User) -> Session {
        if let Err(e) = self.vault().save_user(&user) {
            tracing::warn!("Failed to persist updated user: {e}");
        }
        session.with_user(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Guard, GuardDecision, Redirect};
    use crate::test_support::{closed_port_url, spawn_backend, PASSWORD, VALID_TOKEN};
    use store::{KeyValueStore, MemoryStore};

    fn user(name: &str) -> User {
        User {
            id: 1,
            username: name.to_string(),
            email: format!("{name}@example.com"),
            ..User::default()
        }
    }

    fn store_at(base_url: &str, vault: SessionVault) -> SessionStore {
        SessionStore::new(ApiClient::new(base_url, vault))
    }

    #[test]
    fn test_status_derivation() {
        assert_eq!(Session::loading().status(), SessionStatus::Loading);
        assert_eq!(Session::anonymous().status(), SessionStatus::Anonymous);
        assert_eq!(
            Session::restored("t".into(), user("ada")).status(),
            SessionStatus::Authenticated
        );
        let session = Session::authenticated("t".into(), user("ada"));
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert!(session.is_self("ada"));
        assert!(!session.is_self("bob"));
    }

    #[test]
    fn test_apply_validation_ignores_replaced_session() {
        let mut current = Session::authenticated("new".into(), user("bob"));
        let stale = Session::anonymous();
        assert!(!current.apply_validation("old", &stale));
        assert_eq!(current.username(), Some("bob"));

        let mut restored = Session::restored("old".into(), user("ada"));
        let outcome = Session::authenticated("old".into(), user("ada"));
        assert!(restored.apply_validation("old", &outcome));
        assert!(restored.is_authenticated());
    }

    #[test]
    fn test_restore_empty_and_damaged() {
        let store = MemoryStore::new();
        let sessions = store_at("http://127.0.0.1:9", SessionVault::new(store.clone()));
        assert_eq!(sessions.restore(), Session::anonymous());

        store.set(store::vault::TOKEN_KEY, "tok");
        assert_eq!(sessions.restore(), Session::anonymous());
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_is_optimistic() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.save("tok", &user("ada")).unwrap();
        let session = store_at("http://127.0.0.1:9", vault).restore();
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.username(), Some("ada"));
        assert!(!session.is_validated());

        // Guards act on the restored user before `/validate` answers.
        assert_eq!(
            Guard::PublicOnly.decide(session.status()),
            GuardDecision::Redirect(Redirect::Home)
        );
        assert_eq!(Guard::Protected.decide(session.status()), GuardDecision::Render);
    }

    #[tokio::test]
    async fn test_authenticate_with_accepted_credentials() {
        let backend = spawn_backend().await;
        let vault = SessionVault::new(MemoryStore::new());
        let sessions = store_at(&backend, vault.clone());

        let session = sessions
            .authenticate("ada@example.com", PASSWORD)
            .await
            .unwrap();

        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert!(session.token().is_some_and(|t| !t.is_empty()));
        assert_eq!(session.username(), Some("ada"));
        assert_eq!(vault.token().as_deref(), session.token());
    }

    #[tokio::test]
    async fn test_authenticate_rejected_keeps_vault_empty() {
        let backend = spawn_backend().await;
        let vault = SessionVault::new(MemoryStore::new());
        let sessions = store_at(&backend, vault.clone());

        let err = sessions
            .authenticate("ada@example.com", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(vault.is_empty());
    }

    #[tokio::test]
    async fn test_register_validates_before_sending() {
        let sessions = store_at(&closed_port_url().await, SessionVault::new(MemoryStore::new()));
        let form = SignupForm {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "a".into(),
            confirm_password: "b".into(),
            ..SignupForm::default()
        };
        let err = sessions.register(&form).await.unwrap_err();
        assert_eq!(err, ApiError::validation("Passwords do not match"));
    }

    #[tokio::test]
    async fn test_end_session_with_unreachable_server() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.save("tok", &user("ada")).unwrap();
        let sessions = store_at(&closed_port_url().await, vault.clone());

        let session = sessions.end_session().await;

        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert!(vault.is_empty());
    }

    #[tokio::test]
    async fn test_startup_with_rejected_token() {
        let backend = spawn_backend().await;
        let vault = SessionVault::new(MemoryStore::new());
        vault.save("revoked-token", &user("ada")).unwrap();
        let sessions = store_at(&backend, vault.clone());

        let mut session = sessions.restore();
        assert_eq!(session.status(), SessionStatus::Authenticated);

        let outcome = sessions.validate(&session).await;
        assert!(session.apply_validation("revoked-token", &outcome));

        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert!(vault.is_empty());
    }

    #[tokio::test]
    async fn test_startup_with_accepted_token() {
        let backend = spawn_backend().await;
        let vault = SessionVault::new(MemoryStore::new());
        vault.save(VALID_TOKEN, &user("ada")).unwrap();
        let sessions = store_at(&backend, vault.clone());

        let session = sessions.restore();
        let session = sessions.validate(&session).await;

        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert!(session.is_validated());
        assert!(!vault.is_empty());
    }

    #[tokio::test]
    async fn test_late_rejection_keeps_newer_login() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.save("old", &user("ada")).unwrap();
        let sessions = store_at(&closed_port_url().await, vault.clone());
        let restored = sessions.restore();

        // A new login lands before validation of the old token completes.
        vault.save("new", &user("bob")).unwrap();
        let mut current = Session::authenticated("new".into(), user("bob"));

        let outcome = sessions.validate(&restored).await;
        assert!(!current.apply_validation("old", &outcome));
        assert_eq!(current.username(), Some("bob"));
        assert_eq!(vault.token().as_deref(), Some("new"));
    }

    #[test]
    fn test_update_user_persists_snapshot() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.save("tok", &user("ada")).unwrap();
        let sessions = store_at("http://127.0.0.1:9", vault.clone());
        let session = Session::authenticated("tok".into(), user("ada"));

        let renamed = User {
            first_name: Some("Ada".into()),
            ..user("ada")
        };
        let session = sessions.update_user(&session, renamed.clone());

        assert_eq!(session.user(), Some(&renamed));
        assert_eq!(
            vault.load::<User>(),
            PersistedSession::Restored {
                token: "tok".into(),
                user: renamed
            }
        );
    }
}
