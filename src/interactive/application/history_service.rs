use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::api::CatalogApi;

/// Detached history writes.
///
/// Each write runs on its own spawned thread; failures are logged and never
/// surfaced, retried, or allowed to block the view that triggered them.
/// Nothing outside of tests joins the returned handles.
pub struct HistoryService {
    api: Arc<dyn CatalogApi>,
}

impl HistoryService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    pub fn record_read(&self, email: &str, book_id: &str) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let email = email.to_string();
        let book_id = book_id.to_string();
        thread::spawn(move || {
            if let Err(e) = api.record_read(&email, &book_id) {
                tracing::warn!(book_id = %book_id, error = %e, "failed to record read history");
            }
        })
    }

    pub fn record_search(&self, email: &str, query: &str) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let email = email.to_string();
        let query = query.to_string();
        thread::spawn(move || {
            if let Err(e) = api.record_search(&email, std::slice::from_ref(&query)) {
                tracing::warn!(error = %e, "failed to record search history");
            }
        })
    }
}
