use std::fmt;

use async_trait::async_trait;

use super::types::{Genre, TitleDetails, TitlePage};

/// Errors that can occur while talking to the movie API.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the API's response.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Somewhere movie listings and details come from.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// One page (1-based) of titles in `genre`, best IMDb score first.
    async fn list_titles(&self, genre: &Genre, page: u32) -> Result<TitlePage, CatalogError>;

    /// The full record behind a listing entry's `url`.
    async fn title_details(&self, url: &str) -> Result<TitleDetails, CatalogError>;
}
