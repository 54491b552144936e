pub mod api;
pub mod interactive;
pub mod logging;

pub use api::{ApiError, Book, CatalogApi, FacetFilter, HttpCatalogClient};
pub use interactive::InteractiveCatalog;
