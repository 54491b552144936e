use std::sync::Arc;

use crate::api::{ApiError, Book, CatalogApi};
use crate::interactive::domain::models::{FetchKind, FetchOutcome, FetchRequest, FetchResponse};

/// Executes fetch requests on the worker thread.
///
/// Pure request-to-response mapping; the generation tag passes through
/// untouched and the caller decides whether the response is still current.
pub struct FetchService {
    api: Arc<dyn CatalogApi>,
}

impl FetchService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    pub fn execute(&self, request: FetchRequest) -> FetchResponse {
        let outcome = match request.kind {
            FetchKind::Popular => FetchOutcome::Popular(self.call(|api| api.fetch_popular())),
            FetchKind::Semantic(query) => {
                let result = self.call(|api| api.fetch_semantic(&query));
                FetchOutcome::Semantic { query, result }
            }
            FetchKind::Faceted(filter) => {
                FetchOutcome::Faceted(self.call(|api| api.fetch_faceted(&filter)))
            }
            FetchKind::Suggestions(email) => {
                FetchOutcome::Suggestions(self.call(|api| api.fetch_suggestions(&email)))
            }
        };

        FetchResponse {
            generation: request.generation,
            outcome,
        }
    }

    fn call(
        &self,
        f: impl FnOnce(&dyn CatalogApi) -> Result<Vec<Book>, ApiError>,
    ) -> Result<Vec<Book>, String> {
        f(self.api.as_ref()).map_err(|e| e.to_string())
    }
}
