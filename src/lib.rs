pub mod access;
pub mod auth;
pub mod config;
pub mod store;

pub use access::{authorize, GateOutcome, Role, Route};
pub use auth::{AuthError, AuthManager, NewUser};
pub use config::Config;
pub use store::{SessionUser, Store, StoreError};

use anyhow::Result;
use std::sync::Arc;

use store::FileBackend;

/// The wired-together core an embedding UI holds by reference: the store for
/// domain reads/writes, the auth manager for the session, and the config it
/// was built from.
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub auth: AuthManager,
}

impl AppState {
    /// File-backed state: opens the configured data directory and seeds the
    /// document on first run.
    pub fn new(config: Config) -> Result<Self> {
        let backend = FileBackend::new(&config.storage.data_dir)?;
        let store = Store::with_keys(
            Arc::new(backend),
            config.storage.document_key.clone(),
            config.storage.session_key.clone(),
        );
        Self::with_store(config, store)
    }

    /// State over an injected store, such as an in-memory one in tests.
    pub fn with_store(config: Config, store: Store) -> Result<Self> {
        store.initialize()?;
        let auth = AuthManager::new(store.clone());
        Ok(Self {
            config,
            store,
            auth,
        })
    }
}
