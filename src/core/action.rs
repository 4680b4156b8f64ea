//! # Actions
//!
//! Everything that can happen in JustStream becomes an `Action`.
//! A genre finished loading? That's `Action::GenreLoaded`.
//! User pressed Enter on a movie? That's `Action::OpenModal(key)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` for the event loop. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info, warn};

use crate::catalog::MovieDetails;
use crate::core::modal::ModalKey;
use crate::core::state::{App, RowStatus};

#[derive(Debug)]
pub enum Action {
    /// A row's listing arrived. `movies[i]` fills slot `i`; `None` marks a
    /// title whose details could not be fetched.
    GenreLoaded {
        genre: String,
        movies: Vec<Option<MovieDetails>>,
    },
    /// The row's listing could not be loaded.
    GenreFailed { genre: String, error: String },
    OpenModal(ModalKey),
    CloseModal,
    Quit,
}

/// What the event loop must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::GenreLoaded { genre, movies } => {
            let slots = app.slots_per_genre;
            let mut count = 0;
            for (slot, movie) in movies.into_iter().take(slots).enumerate() {
                if let Some(movie) = movie {
                    app.modals.insert(ModalKey::new(genre.clone(), slot), movie);
                    count += 1;
                }
            }
            if let Some(row) = app.rows.iter_mut().find(|r| r.genre.label == genre) {
                row.status = RowStatus::Ready;
            }
            info!("Genre '{}' loaded with {} movies", genre, count);
            app.status_message = if app.is_loading() {
                format!("Loaded {genre}")
            } else {
                String::from("Ready")
            };
            Effect::None
        }
        Action::GenreFailed { genre, error } => {
            warn!("Genre '{}' failed to load: {}", genre, error);
            app.status_message = format!("{genre}: {error}");
            if let Some(row) = app.rows.iter_mut().find(|r| r.genre.label == genre) {
                row.status = RowStatus::Failed(error);
            }
            Effect::None
        }
        Action::OpenModal(key) => {
            if !app.modals.open(key.clone()) {
                debug!("No details for {:?} yet", key);
            }
            Effect::None
        }
        Action::CloseModal => {
            app.modals.close();
            Effect::None
        }
        Action::Quit => {
            app.should_quit = true;
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie, test_app};

    #[test]
    fn test_genre_loaded_fills_slots() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::GenreLoaded {
                genre: "Action".to_string(),
                movies: vec![Some(movie(1, "Heat")), Some(movie(2, "Ronin"))],
            },
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.row("Action").unwrap().status, RowStatus::Ready);
        assert_eq!(
            app.modals.get(&ModalKey::new("Action", 1)).unwrap().title,
            "Ronin"
        );
        assert_eq!(app.status_message, "Loaded Action");
    }

    #[test]
    fn test_extra_movies_beyond_slots_are_dropped() {
        let mut app = test_app();
        let movies = (0..10).map(|i| Some(movie(i, "M"))).collect();
        update(
            &mut app,
            Action::GenreLoaded {
                genre: "Sci-Fi".to_string(),
                movies,
            },
        );
        assert_eq!(app.modals.loaded_in("Sci-Fi"), app.slots_per_genre);
    }

    #[test]
    fn test_all_rows_loaded_reports_ready() {
        let mut app = test_app();
        for genre in ["Action", "Sci-Fi"] {
            update(
                &mut app,
                Action::GenreLoaded {
                    genre: genre.to_string(),
                    movies: vec![Some(movie(1, "X"))],
                },
            );
        }
        assert!(!app.is_loading());
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn test_missing_details_leave_their_slot_empty() {
        let mut app = test_app();
        update(
            &mut app,
            Action::GenreLoaded {
                genre: "Action".to_string(),
                movies: vec![Some(movie(0, "Heat")), None, Some(movie(2, "Ronin"))],
            },
        );

        assert_eq!(app.row("Action").unwrap().status, RowStatus::Ready);
        assert!(app.modals.get(&ModalKey::new("Action", 0)).is_some());
        assert!(app.modals.get(&ModalKey::new("Action", 1)).is_none());
        assert_eq!(
            app.modals.get(&ModalKey::new("Action", 2)).unwrap().title,
            "Ronin"
        );
        assert_eq!(app.modals.loaded_in("Action"), 2);
    }

    #[test]
    fn test_genre_failed_marks_row() {
        let mut app = test_app();
        update(
            &mut app,
            Action::GenreFailed {
                genre: "Sci-Fi".to_string(),
                error: "network error: refused".to_string(),
            },
        );
        assert_eq!(
            app.row("Sci-Fi").unwrap().status,
            RowStatus::Failed("network error: refused".to_string())
        );
        assert!(app.status_message.contains("refused"));
        assert_eq!(app.row("Action").unwrap().status, RowStatus::Loading);
    }

    #[test]
    fn test_open_and_close_modal() {
        let mut app = test_app();
        update(&mut app, Action::OpenModal(ModalKey::new("Action", 0)));
        assert!(!app.modals.is_open());

        update(
            &mut app,
            Action::GenreLoaded {
                genre: "Action".to_string(),
                movies: vec![Some(movie(1, "Heat"))],
            },
        );
        update(&mut app, Action::OpenModal(ModalKey::new("Action", 0)));
        assert!(app.modals.is_open());

        update(&mut app, Action::CloseModal);
        assert!(!app.modals.is_open());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert!(app.should_quit);
    }
}
