//! REST client for the cosmetics catalog backend.

pub mod config;
pub mod http_utils;
pub mod api;

pub use config::ClientConfig;
pub use http_utils::CatalogClient;
