//! # Catalog
//!
//! Movie data for the home screen rows. [`fetch_genre`] walks the listing
//! pages of one genre until it has enough titles for every carousel slot,
//! then resolves each listing entry into a display-ready [`MovieDetails`].
//!
//! A failed listing fails the whole row. A failed detail request only
//! empties its own slot.

pub mod client;
pub mod source;
pub mod types;

use futures::future::join_all;
use log::{info, warn};

pub use client::HttpCatalog;
pub use source::{CatalogError, MovieSource};
pub use types::{Genre, MovieDetails, TitleDetails, TitlePage, TitleSummary};

/// Collect up to `slots` listing entries for `genre`, following `next` pages.
pub async fn collect_titles(
    source: &dyn MovieSource,
    genre: &Genre,
    slots: usize,
) -> Result<Vec<TitleSummary>, CatalogError> {
    let mut titles = Vec::with_capacity(slots);
    let mut page = 1;
    while titles.len() < slots {
        let listing = source.list_titles(genre, page).await?;
        let remaining = slots - titles.len();
        titles.extend(listing.results.into_iter().take(remaining));
        if listing.next.is_none() {
            break;
        }
        page += 1;
    }
    Ok(titles)
}

/// Fetch the movies shown in a genre row, in slot order.
///
/// Slot `i` holds `None` when the details of the `i`-th listed title could
/// not be fetched.
pub async fn fetch_genre(
    source: &dyn MovieSource,
    genre: &Genre,
    slots: usize,
) -> Result<Vec<Option<MovieDetails>>, CatalogError> {
    let titles = collect_titles(source, genre, slots).await?;
    info!(
        "{}: {} titles listed for '{}', fetching details",
        source.name(),
        titles.len(),
        genre.label
    );
    let details = join_all(titles.iter().map(|t| source.title_details(&t.url))).await;
    let movies = details
        .into_iter()
        .zip(&titles)
        .enumerate()
        .map(|(slot, (result, title))| match result {
            Ok(details) => Some(MovieDetails::from(details)),
            Err(e) => {
                warn!(
                    "'{}' slot {}: details for {} unavailable: {}",
                    genre.label, slot, title.url, e
                );
                None
            }
        })
        .collect();
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubSource;

    #[test]
    fn test_collect_titles_spans_two_pages() {
        let source = StubSource::with_titles(12, 5);
        let titles =
            tokio_test::block_on(collect_titles(&source, &Genre::named("Action"), 7)).unwrap();

        assert_eq!(titles.len(), 7);
        assert_eq!(titles[5].id, 5);
        assert_eq!(titles[6].id, 6);
        assert_eq!(source.pages_requested(), vec![1, 2]);
    }

    #[test]
    fn test_collect_titles_stops_when_listing_ends() {
        let source = StubSource::with_titles(3, 5);
        let titles =
            tokio_test::block_on(collect_titles(&source, &Genre::new("Best", ""), 7)).unwrap();

        assert_eq!(titles.len(), 3);
        assert_eq!(source.pages_requested(), vec![1]);
    }

    #[test]
    fn test_fetch_genre_keeps_slot_order() {
        let source = StubSource::with_titles(10, 5);
        let movies =
            tokio_test::block_on(fetch_genre(&source, &Genre::named("Sci-Fi"), 7)).unwrap();

        let ids: Vec<u64> = movies.iter().flatten().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(movies[2].as_ref().unwrap().title, "Movie 2");
    }

    #[test]
    fn test_failed_detail_only_empties_its_slot() {
        let source = StubSource::with_titles(5, 5).failing_details(&[1, 3]);
        let movies =
            tokio_test::block_on(fetch_genre(&source, &Genre::named("Action"), 7)).unwrap();

        assert_eq!(movies.len(), 5);
        assert!(movies[1].is_none());
        assert!(movies[3].is_none());
        let loaded: Vec<u64> = movies.iter().flatten().map(|m| m.id).collect();
        assert_eq!(loaded, vec![0, 2, 4]);
    }
}
