use logquery::LogStore;
use std::sync::Arc;

pub mod health;
pub mod logs;
pub mod search;

/// Shared across requests. Holds no mutable state of its own.
pub struct AppState {
    pub store: Arc<dyn LogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }
}

pub use health::health;
pub use logs::ingest_log;
pub use search::{global_search, search};
