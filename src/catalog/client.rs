//! HTTP implementation of [`MovieSource`] for the JustStream movie API.
//!
//! ```text
//! GET {base}/titles/?genre=Sci-Fi&sort_by=-imdb_score          page 1
//! GET {base}/titles/?genre=Sci-Fi&sort_by=-imdb_score&page=2   page 2
//! GET {base}/titles/1375666                                     details (listing `url`)
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{CatalogError, MovieSource};
use super::types::{Genre, TitleDetails, TitlePage};

/// Listings are always requested best-first.
pub const SORT_BY_SCORE: &str = "-imdb_score";

pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The listing endpoint, without query string.
    pub fn titles_url(&self) -> String {
        format!("{}/titles/", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CatalogError> {
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Movie API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Movie API error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MovieSource for HttpCatalog {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_titles(&self, genre: &Genre, page: u32) -> Result<TitlePage, CatalogError> {
        info!("Listing titles: genre={:?}, page={}", genre.filter, page);
        let mut query = vec![
            ("genre", genre.filter.clone()),
            ("sort_by", SORT_BY_SCORE.to_string()),
        ];
        if page > 1 {
            query.push(("page", page.to_string()));
        }
        let request = self.client.get(self.titles_url()).query(&query);
        self.get_json(request).await
    }

    async fn title_details(&self, url: &str) -> Result<TitleDetails, CatalogError> {
        debug!("Fetching title details: {}", url);
        self.get_json(self.client.get(url)).await
    }
}
