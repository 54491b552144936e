use std::time::Duration;

use serde_json::{Value, json};

use super::error::ApiError;
use super::models::{Book, FacetFilter};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Typed access to the catalog search service.
///
/// Implementations hold no session state; each call is an independent
/// request/response mapping. The interactive layer (and its tests) program
/// against this trait rather than the HTTP client directly.
pub trait CatalogApi: Send + Sync {
    /// Popular titles, most searched first.
    fn fetch_popular(&self) -> Result<Vec<Book>, ApiError>;

    /// Free-text semantic search. Callers must never pass a blank query;
    /// the session controller enforces that before dispatching.
    fn fetch_semantic(&self, query: &str) -> Result<Vec<Book>, ApiError>;

    /// Structured faceted search. All five filter fields are transmitted,
    /// empty ones included.
    fn fetch_faceted(&self, filter: &FacetFilter) -> Result<Vec<Book>, ApiError>;

    /// Personalized suggestions for the given account.
    fn fetch_suggestions(&self, email: &str) -> Result<Vec<Book>, ApiError>;

    /// Append a book to the account's read history.
    fn record_read(&self, email: &str, book_id: &str) -> Result<(), ApiError>;

    /// Append queries to the account's search history.
    fn record_search(&self, email: &str, queries: &[String]) -> Result<(), ApiError>;

    /// Create an account.
    fn register(&self, email: &str, username: &str) -> Result<(), ApiError>;
}

/// HTTP implementation of [`CatalogApi`] backed by a [`ureq::Agent`].
pub struct HttpCatalogClient {
    base_url: String,
    http: ureq::Agent,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get_books(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<Book>, ApiError> {
        let mut request = self.http.get(&self.url(path));
        for (key, value) in params {
            request = request.query(key, value);
        }
        let response = request.call().map_err(classify)?;
        let body: Value = response
            .into_json()
            .map_err(|e| ApiError::Payload(e.to_string()))?;
        parse_books(body)
    }

    fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(&self.url(path))
            .send_json(body)
            .map_err(classify)?;
        response
            .into_json()
            .map_err(|e| ApiError::Payload(e.to_string()))
    }
}

impl CatalogApi for HttpCatalogClient {
    fn fetch_popular(&self) -> Result<Vec<Book>, ApiError> {
        self.get_books(
            "/elasticsearch/popular",
            &[("order", "desc".to_string())],
        )
    }

    fn fetch_semantic(&self, query: &str) -> Result<Vec<Book>, ApiError> {
        self.get_books("/elasticsearch/summary", &[("query", quoted(query))])
    }

    fn fetch_faceted(&self, filter: &FacetFilter) -> Result<Vec<Book>, ApiError> {
        self.get_books("/elasticsearch/filter", &faceted_params(filter))
    }

    fn fetch_suggestions(&self, email: &str) -> Result<Vec<Book>, ApiError> {
        let body = self.post_json("/elasticsearch/customize", json!({ "email": email }))?;
        parse_books(body)
    }

    fn record_read(&self, email: &str, book_id: &str) -> Result<(), ApiError> {
        self.post_json("/read", json!({ "email": email, "read": [book_id] }))
            .map(|_| ())
    }

    fn record_search(&self, email: &str, queries: &[String]) -> Result<(), ApiError> {
        self.post_json("/searched", json!({ "email": email, "search": queries }))
            .map(|_| ())
    }

    fn register(&self, email: &str, username: &str) -> Result<(), ApiError> {
        self.post_json("/register", json!({ "email": email, "username": username }))
            .map(|_| ())
    }
}

fn classify(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(code, _) => ApiError::Status { code },
        ureq::Error::Transport(transport) => ApiError::Network(transport.to_string()),
    }
}

/// The service expects the semantic query value wrapped in literal double
/// quotes: `?query="dystopian classics"`.
fn quoted(query: &str) -> String {
    format!("\"{query}\"")
}

/// Query parameters for the faceted route. All five facets are always
/// present; `genere` is the spelling the service expects on the wire.
fn faceted_params(filter: &FacetFilter) -> [(&'static str, String); 5] {
    [
        ("author", filter.author.clone()),
        ("title", filter.title.clone()),
        ("genere", filter.genre.clone()),
        ("isbn", filter.isbn.clone()),
        ("publisher", filter.publisher.clone()),
    ]
}

/// Pulls the `data` field out of the response envelope.
///
/// The backend sends a plain string ("Your search returned no results.")
/// instead of a list when nothing matched, so anything that is not an array
/// normalizes to an empty result set rather than an error.
fn parse_books(mut body: Value) -> Result<Vec<Book>, ApiError> {
    match body.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| ApiError::Payload(e.to_string()))
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}
