//! Application state.

use mpm_core::{DrawingStore, InventoryStore};
use std::sync::Arc;

/// Default request body limit for drawing uploads.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
    pub drawings: Arc<DrawingStore>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>, drawings: DrawingStore) -> Self {
        Self {
            store,
            drawings: Arc::new(drawings),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }
}
