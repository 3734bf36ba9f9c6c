//! IO utilities: HTTP transport and the download cache

pub mod cache;
pub mod http;

pub use cache::download_if_not_cached;
pub use http::{Fetcher, HttpClient};
