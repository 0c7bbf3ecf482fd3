//! Catalog stores and the engagement mutation path.

/// Artwork (item) store.
pub mod artwork;
/// Engagement counter store.
pub mod counter;

use crate::error::AppError;
use crate::models::{Artwork, CatalogSummary};
use crate::ranking;
use chrono::{DateTime, Utc};

pub use artwork::ArtworkStore;
pub use counter::CounterStore;

/// Catalog handle combining the read-mostly artwork store with the hot
/// engagement counter store.
///
/// The artwork store owns static attributes; the counter store owns live
/// view/like deltas. Everything the engine hands out carries effective
/// counts (base plus delta) so base-only counts never leak once an item has
/// received engagement.
#[derive(Default)]
pub struct Catalog {
    pub artworks: ArtworkStore,
    pub counters: CounterStore,
}


impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one view for an artwork.
    ///
    /// # Returns
    /// The new effective view count.
    ///
    /// # Errors
    /// `NotFound` when the id is absent from the artwork store; the counter
    /// store never materializes an entry for a nonexistent item.
    pub fn record_view(&self, id: &str) -> Result<u64, AppError> {
        let artwork = self.artworks.get(id)?.ok_or(AppError::NotFound)?;
        let delta = self.counters.bump_view(id)?;
        Ok(artwork.views + delta)
    }

    /// Record one like for an artwork.
    ///
    /// # Returns
    /// The new effective like count.
    ///
    /// # Errors
    /// `NotFound` when the id is absent from the artwork store.
    pub fn record_like(&self, id: &str) -> Result<u64, AppError> {
        let artwork = self.artworks.get(id)?.ok_or(AppError::NotFound)?;
        let delta = self.counters.bump_like(id)?;
        Ok(artwork.likes + delta)
    }

    /// Effective `(views, likes)` for one artwork.
    pub fn effective_counts(&self, artwork: &Artwork) -> Result<(u64, u64), AppError> {
        let (view_delta, like_delta) = self.counters.deltas(&artwork.id)?;
        Ok((artwork.views + view_delta, artwork.likes + like_delta))
    }

    /// Snapshot every artwork with effective counts applied.
    pub fn annotated_snapshot(&self) -> Result<Vec<Artwork>, AppError> {
        let snapshot = self.artworks.snapshot()?;
        let mut annotated = Vec::with_capacity(snapshot.len());
        for artwork in snapshot {
            let (views, likes) = self.effective_counts(&artwork)?;
            annotated.push(artwork.with_effective_counts(views, likes));
        }
        Ok(annotated)
    }

    /// Ranked preview lists (top trending and top popular), computed from
    /// the same snapshot and the same scoring code as the trending sort.
    pub fn summary(&self, now: DateTime<Utc>) -> Result<CatalogSummary, AppError> {
        let annotated = self.annotated_snapshot()?;
        Ok(CatalogSummary {
            trending: ranking::top_trending(annotated.clone(), now),
            popular: ranking::top_popular(annotated),
        })
    }
}
