//! Persistent store over a single JSON document.
//!
//! All domain data lives in one document under one storage key; the current
//! session lives under a second key. Collection writes replace the named
//! collection and persist the whole document: last write wins, no merging.

mod backend;
mod document;
mod models;
mod seed;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use document::{Collection, Document};
pub use models::{
    Analytics, Assignment, Customer, CustomerStats, Event, FoodItem, MonthlyStat, SessionUser,
    Shift, StaffMember, User,
};
pub use seed::seed_document;

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage key the document is persisted under unless configured otherwise.
pub const DEFAULT_DOCUMENT_KEY: &str = "ecovow_data";
/// Storage key the session is persisted under unless configured otherwise.
pub const DEFAULT_SESSION_KEY: &str = "current_user";

/// A failed attempt to persist state. Reads never produce this; absent or
/// malformed data degrades to empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Handle to the persisted document and session slots.
///
/// Cloning is cheap; clones share the same backend. There is no locking
/// across read-modify-write cycles: the execution model is a single thread
/// driven by a UI, and the contract is last-write-wins.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    document_key: String,
    session_key: String,
}

impl Store {
    /// Store over an injected backend with the default storage keys.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_keys(backend, DEFAULT_DOCUMENT_KEY, DEFAULT_SESSION_KEY)
    }

    /// Store over an injected backend with caller-chosen storage keys.
    pub fn with_keys(
        backend: Arc<dyn StorageBackend>,
        document_key: impl Into<String>,
        session_key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            document_key: document_key.into(),
            session_key: session_key.into(),
        }
    }

    /// In-memory store with default keys. Intended for tests and embedding
    /// scenarios that do not want persistence.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Seed the document on first run. Idempotent: anything already stored
    /// under the document key, even a blob that no longer parses, is left
    /// untouched.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if self.backend.get(&self.document_key).is_some() {
            debug!("Document already present, skipping seed");
            return Ok(());
        }
        info!("No document found, writing seed data");
        self.persist_document(&seed::seed_document())
    }

    /// The whole parsed document. Absent or malformed storage yields an
    /// empty document.
    pub fn document(&self) -> Document {
        let Some(raw) = self.backend.get(&self.document_key) else {
            return Document::default();
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(err) => {
                warn!("Stored document is not valid JSON, treating as empty: {}", err);
                Document::default()
            }
        }
    }

    /// Ordered records of one collection; empty if the document is absent,
    /// malformed, or the collection unset. Never fails.
    pub fn read<C: Collection>(&self) -> Vec<C> {
        C::records(&self.document()).to_vec()
    }

    /// Replace one collection and persist the whole document.
    pub fn write<C: Collection>(&self, records: Vec<C>) -> Result<(), StoreError> {
        let mut doc = self.document();
        *C::records_mut(&mut doc) = records;
        self.persist_document(&doc)
    }

    /// The analytics block (a single nested object, not a record sequence).
    pub fn analytics(&self) -> Analytics {
        self.document().analytics
    }

    /// Replace the analytics block and persist the whole document.
    pub fn write_analytics(&self, analytics: Analytics) -> Result<(), StoreError> {
        let mut doc = self.document();
        doc.analytics = analytics;
        self.persist_document(&doc)
    }

    /// The current session, if one is stored and parses cleanly.
    ///
    /// The session is not re-validated against the document; it can go stale
    /// if the underlying user record is edited or deleted elsewhere.
    pub fn session(&self) -> Option<SessionUser> {
        let raw = self.backend.get(&self.session_key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("Stored session is not valid JSON, treating as absent: {}", err);
                None
            }
        }
    }

    pub fn set_session(&self, user: &SessionUser) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.backend.set(&self.session_key, &raw)
    }

    pub fn clear_session(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.session_key)
    }

    fn persist_document(&self, doc: &Document) -> Result<(), StoreError> {
        let raw = serde_json::to_string(doc)?;
        self.backend.set(&self.document_key, &raw)
    }
}
