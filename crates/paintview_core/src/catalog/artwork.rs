//! In-memory artwork store with untorn snapshot semantics.

use crate::error::AppError;
use crate::models::Artwork;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Read-mostly store of static artwork attributes.
///
/// Artworks are held behind `Arc` and the map behind an `RwLock`: a snapshot
/// clones the `Arc`s under the read lock, so a concurrently ingested item is
/// either fully visible or absent, never partially constructed.
#[derive(Default)]
pub struct ArtworkStore {
    items: RwLock<HashMap<String, Arc<Artwork>>>,
}

impl ArtworkStore {
    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Arc<Artwork>>>, AppError> {
        self.items
            .read()
            .map_err(|_| AppError::Unavailable("artwork store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Arc<Artwork>>>, AppError> {
        self.items
            .write()
            .map_err(|_| AppError::Unavailable("artwork store lock poisoned".to_string()))
    }

    /// Look up an artwork by id.
    pub fn get(&self, id: &str) -> Result<Option<Arc<Artwork>>, AppError> {
        Ok(self.read()?.get(id).cloned())
    }

    /// Whether an artwork with this id exists.
    pub fn contains(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.read()?.contains_key(id))
    }

    /// Number of artworks in the store.
    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    /// Whether the store holds no artworks.
    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_empty())
    }

    /// Snapshot of every artwork currently in the store.
    pub fn snapshot(&self) -> Result<Vec<Arc<Artwork>>, AppError> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Ingest a new artwork.
    ///
    /// # Errors
    /// `BadRequest` when an artwork with the same id already exists; the
    /// store never mutates an item in place.
    pub fn insert(&self, artwork: Artwork) -> Result<(), AppError> {
        let mut items = self.write()?;
        if items.contains_key(&artwork.id) {
            return Err(AppError::BadRequest(format!(
                "Duplicate artwork id: {}",
                artwork.id
            )));
        }
        items.insert(artwork.id.clone(), Arc::new(artwork));
        Ok(())
    }
}
