//! # Session vault — persisted bearer token and user snapshot
//!
//! The client keeps exactly two pieces of state across reloads: the bearer token
//! issued by `/login` or `/signup`, and the JSON-serialised user that came with
//! it. [`SessionVault`] owns those two keys on top of any [`KeyValueStore`], so
//! the same logic works against browser `localStorage`, a file in the platform
//! data directory, or an in-memory map in tests.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string map with `get`/`set`/`remove`. `localStorage` is
//! synchronous, so there is no reason to make the trait async. Implementations
//! live in sibling modules ([`crate::memory`], [`crate::file_store`],
//! [`crate::local`]).
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | opaque bearer token |
//! | `user` | user snapshot as JSON |
//!
//! When a namespace is configured the keys become `<namespace>:token` and
//! `<namespace>:user`.
//!
//! ## Invariant
//!
//! Token and user are written and cleared together. [`SessionVault::load`]
//! reports a half-written or unreadable pair as [`PersistedSession::Damaged`]
//! so the caller can wipe it instead of trusting it.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Synchronous string key/value persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// What [`SessionVault::load`] found in storage.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistedSession<U> {
    /// Nothing stored.
    Empty,
    /// A complete token + user pair.
    Restored { token: String, user: U },
    /// Only one half of the pair, or a user blob that no longer parses.
    Damaged,
}

/// Owner of the persisted `token` / `user` pair.
#[derive(Clone)]
pub struct SessionVault {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl fmt::Debug for SessionVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionVault")
            .field("namespace", &self.namespace)
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl SessionVault {
    /// Vault using the plain `token` / `user` keys.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self::with_namespace(store, "")
    }

    /// Vault whose keys are prefixed with `<namespace>:`. An empty namespace
    /// means no prefix.
    pub fn with_namespace(store: impl KeyValueStore + 'static, namespace: &str) -> Self {
        Self {
            store: Arc::new(store),
            namespace: namespace.trim().to_string(),
        }
    }

    fn key(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}:{name}", self.namespace)
        }
    }

    /// The stored bearer token, if any. Blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(&self.key(TOKEN_KEY))
            .filter(|t| !t.trim().is_empty())
    }

    /// Read the persisted pair.
    pub fn load<U: DeserializeOwned>(&self) -> PersistedSession<U> {
        let token = self.token();
        let user = self
            .store
            .get(&self.key(USER_KEY))
            .filter(|u| !u.trim().is_empty());

        match (token, user) {
            (None, None) => PersistedSession::Empty,
            (Some(token), Some(raw)) => match serde_json::from_str::<U>(&raw) {
                Ok(user) => PersistedSession::Restored { token, user },
                Err(e) => {
                    tracing::warn!("Stored user snapshot is unreadable: {e}");
                    PersistedSession::Damaged
                }
            },
            _ => PersistedSession::Damaged,
        }
    }

    /// Persist a token together with its user snapshot.
    pub fn save<U: Serialize>(&self, token: &str, user: &U) -> Result<(), serde_json::Error> {
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.key(TOKEN_KEY), token);
        self.store.set(&self.key(USER_KEY), &raw);
        Ok(())
    }

    /// Replace only the user snapshot, keeping the current token.
    ///
    /// Does nothing when no token is stored, so a stray profile update can
    /// never produce a user without a token.
    pub fn save_user<U: Serialize>(&self, user: &U) -> Result<(), serde_json::Error> {
        if self.token().is_none() {
            return Ok(());
        }
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.key(USER_KEY), &raw);
        Ok(())
    }

    /// Remove both keys.
    pub fn clear(&self) {
        self.store.remove(&self.key(TOKEN_KEY));
        self.store.remove(&self.key(USER_KEY));
    }

    /// True when neither key is present.
    pub fn is_empty(&self) -> bool {
        self.store.get(&self.key(TOKEN_KEY)).is_none()
            && self.store.get(&self.key(USER_KEY)).is_none()
    }
}
