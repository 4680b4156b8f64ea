//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::catalog::{
    CatalogError, Genre, MovieDetails, MovieSource, TitleDetails, TitlePage, TitleSummary,
};
use crate::carousel::MOBILE_BREAKPOINT_PX;
use crate::core::config::{DEFAULT_CELL_WIDTH_PX, ROW_OPTIONS, ResolvedConfig};
use crate::core::state::App;

/// An in-memory movie source with `total` titles served `page_size` at a time.
pub struct StubSource {
    total: u64,
    page_size: u64,
    pages: Mutex<Vec<u32>>,
    failing: Vec<u64>,
}

impl StubSource {
    pub fn with_titles(total: u64, page_size: u64) -> Self {
        Self {
            total,
            page_size,
            pages: Mutex::new(Vec::new()),
            failing: Vec::new(),
        }
    }

    /// Detail requests for these ids answer with an HTTP 404.
    pub fn failing_details(mut self, ids: &[u64]) -> Self {
        self.failing = ids.to_vec();
        self
    }

    /// Listing pages requested so far, in order.
    pub fn pages_requested(&self) -> Vec<u32> {
        self.pages.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MovieSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn list_titles(&self, _genre: &Genre, page: u32) -> Result<TitlePage, CatalogError> {
        if let Ok(mut pages) = self.pages.lock() {
            pages.push(page);
        }
        let start = (page as u64 - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total);
        let results = (start..end)
            .map(|id| TitleSummary {
                id,
                url: format!("stub://titles/{id}"),
                title: format!("Movie {id}"),
                image_url: None,
                imdb_score: "7.0".to_string(),
            })
            .collect();
        Ok(TitlePage {
            count: self.total,
            next: (end < self.total).then(|| format!("stub://titles/?page={}", page + 1)),
            previous: None,
            results,
        })
    }

    async fn title_details(&self, url: &str) -> Result<TitleDetails, CatalogError> {
        let id = url
            .rsplit('/')
            .next()
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| CatalogError::Parse(format!("bad url: {url}")))?;
        if self.failing.contains(&id) {
            return Err(CatalogError::Api {
                status: 404,
                message: "not found".to_string(),
            });
        }
        Ok(TitleDetails {
            id,
            url: url.to_string(),
            title: format!("Movie {id}"),
            image_url: None,
            genres: vec!["Drama".to_string()],
            date_published: Some("2001-01-01".to_string()),
            rated: "PG".to_string(),
            imdb_score: "7.0".to_string(),
            directors: vec![],
            actors: vec![],
            writers: vec![],
            duration: Some(100),
            countries: vec![],
            worldwide_gross_income: None,
            long_description: String::new(),
        })
    }
}

/// Display-ready details with just an id and a title.
pub fn movie(id: u64, title: &str) -> MovieDetails {
    MovieDetails {
        id,
        title: title.to_string(),
        image_url: None,
        genres: "Drama".to_string(),
        released: "Jan 01, 2001".to_string(),
        rated: "PG".to_string(),
        imdb_score: "7.0".to_string(),
        directors: "Someone".to_string(),
        actors: "Someone Else".to_string(),
        writers: "A Writer".to_string(),
        duration: "1h40min".to_string(),
        countries: "France".to_string(),
        box_office: "Unknown".to_string(),
        description: "A film.".to_string(),
    }
}

/// Creates a test App with two genre rows of seven slots.
pub fn test_app() -> App {
    App::new(
        "http://localhost:8000/api/v1".to_string(),
        vec![Genre::named("Action"), Genre::named("Sci-Fi")],
        7,
    )
}

/// Resolved config matching `test_app()`, without touching the environment.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        api_url: "http://localhost:8000/api/v1".to_string(),
        slots_per_genre: 7,
        mobile_breakpoint: MOBILE_BREAKPOINT_PX,
        cell_width_px: DEFAULT_CELL_WIDTH_PX,
        carousel: ROW_OPTIONS,
        genres: vec![Genre::named("Action"), Genre::named("Sci-Fi")],
    }
}
