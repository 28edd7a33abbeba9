use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::editor::InputDrafts;
use crate::store::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Redis when configured, otherwise in-process memory.
    pub store: Arc<dyn KeyValueStore>,
    /// Raw tag-field text per entity. Edits hold the write lock across
    /// load → apply → save so concurrent edits serialize.
    pub drafts: Arc<RwLock<InputDrafts>>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: Config) -> Self {
        Self {
            store,
            drafts: Arc::new(RwLock::new(InputDrafts::default())),
            config,
        }
    }
}
