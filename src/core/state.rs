//! # Application State
//!
//! Core business state for JustStream. This module contains domain logic only -
//! no TUI-specific types. Presentation state (carousels, focus, hit areas)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── api_url: String               // movie API base URL
//! ├── rows: Vec<GenreRow>           // one per genre, in display order
//! ├── slots_per_genre: usize        // movies per row
//! ├── modals: ModalRegistry         // details keyed by (genre, slot)
//! ├── status_message: String        // title bar text
//! └── should_quit: bool
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::catalog::Genre;
use crate::core::config::ResolvedConfig;
use crate::core::modal::ModalRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct GenreRow {
    pub genre: Genre,
    pub status: RowStatus,
}

pub struct App {
    pub api_url: String,
    pub rows: Vec<GenreRow>,
    pub slots_per_genre: usize,
    pub modals: ModalRegistry,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(api_url: String, genres: Vec<Genre>, slots_per_genre: usize) -> Self {
        Self {
            api_url,
            rows: genres
                .into_iter()
                .map(|genre| GenreRow {
                    genre,
                    status: RowStatus::Loading,
                })
                .collect(),
            slots_per_genre,
            modals: ModalRegistry::new(),
            status_message: String::from("Loading movies..."),
            should_quit: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.api_url.clone(),
            config.genres.clone(),
            config.slots_per_genre,
        )
    }

    pub fn row(&self, genre: &str) -> Option<&GenreRow> {
        self.rows.iter().find(|r| r.genre.label == genre)
    }

    pub fn is_loading(&self) -> bool {
        self.rows.iter().any(|r| r.status == RowStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    use super::RowStatus;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Loading movies...");
        assert!(app.is_loading());
        assert_eq!(app.rows.len(), 2);
        assert_eq!(app.row("Action").unwrap().status, RowStatus::Loading);
        assert!(!app.modals.is_open());
    }
}
