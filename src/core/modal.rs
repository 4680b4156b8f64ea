//! # Detail Overlays
//!
//! One overlay per (genre row, carousel slot). Entries are registered as
//! movie details arrive; at most one overlay is open at a time.

use std::collections::HashMap;

use crate::catalog::MovieDetails;

/// Identifies a carousel slot: the genre row's label plus the slot index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModalKey {
    pub genre: String,
    pub slot: usize,
}

impl ModalKey {
    pub fn new(genre: impl Into<String>, slot: usize) -> Self {
        Self {
            genre: genre.into(),
            slot,
        }
    }
}

#[derive(Debug, Default)]
pub struct ModalRegistry {
    entries: HashMap<ModalKey, MovieDetails>,
    open: Option<ModalKey>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the details behind a slot.
    pub fn insert(&mut self, key: ModalKey, details: MovieDetails) {
        self.entries.insert(key, details);
    }

    pub fn get(&self, key: &ModalKey) -> Option<&MovieDetails> {
        self.entries.get(key)
    }

    /// Open the overlay for `key`. Slots with nothing loaded yet stay closed.
    pub fn open(&mut self, key: ModalKey) -> bool {
        if self.entries.contains_key(&key) {
            self.open = Some(key);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_key(&self) -> Option<&ModalKey> {
        self.open.as_ref()
    }

    /// The details shown by the open overlay, if any.
    pub fn current(&self) -> Option<&MovieDetails> {
        self.open.as_ref().and_then(|key| self.entries.get(key))
    }

    /// Number of slots with details loaded for `genre`.
    pub fn loaded_in(&self, genre: &str) -> usize {
        self.entries.keys().filter(|k| k.genre == genre).count()
    }
}
