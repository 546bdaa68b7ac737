//! Platform-appropriate session storage.
//!
//! Returns a [`store::SessionVault`] backed by:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Native**: `session.json` under the platform data directory via [`store::FileStore`]
//! - **WASM without `web`**: an in-memory map, so nothing survives a reload

use api::{ApiClient, SessionStore};
use store::{DevfolioConfig, SessionVault};

/// Create the vault for the configured key namespace.
pub fn make_vault(config: &DevfolioConfig) -> SessionVault {
    let namespace = config.storage.namespace.as_str();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionVault::with_namespace(store::LocalStorageStore::new(), namespace)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SessionVault::with_namespace(store::FileStore::default_location(), namespace)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionVault::with_namespace(store::MemoryStore::new(), namespace)
    }
}

/// Load configuration and wire a [`SessionStore`] on top of [`make_vault`].
pub fn make_session_store() -> SessionStore {
    let config = DevfolioConfig::load();
    tracing::info!("Using backend at {}", config.api.base_url);
    let vault = make_vault(&config);
    SessionStore::new(ApiClient::from_config(&config, vault))
}
