pub mod fetch_service;
pub mod history_service;
