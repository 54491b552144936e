//! Client for the catalog search service HTTP surface.
//!
//! Pure request/response mapping and error classification; all session
//! state lives in the interactive layer.

pub mod client;
pub mod error;
pub mod models;

pub use client::{CatalogApi, HttpCatalogClient};
pub use error::ApiError;
pub use models::{Book, FacetFilter};
