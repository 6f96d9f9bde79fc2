//! In-memory storage for uploaded room photos.
//!
//! Photo bytes never touch the session store. The session keeps photo ids
//! and this store holds the bytes, weighted by size so the cache cap bounds
//! total memory rather than photo count.

use std::time::Duration;

use axum::body::Bytes;
use ecobid_core::PhotoId;
use moka::future::Cache;

/// Total bytes held across all visitors before eviction starts.
const MAX_TOTAL_BYTES: u64 = 256 * 1024 * 1024;

/// Photos for abandoned journeys expire after a day.
const PHOTO_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// A photo held for the duration of a quote journey.
#[derive(Debug, Clone)]
pub struct StoredPhoto {
    pub bytes: Bytes,
    pub content_type: String,
    pub filename: String,
}

/// Uploaded photos, capped by total size.
///
/// Cheaply cloneable; all clones share one cache.
#[derive(Clone)]
pub struct PhotoStore {
    photos: Cache<PhotoId, StoredPhoto>,
}

impl PhotoStore {
    #[must_use]
    pub fn new() -> Self {
        let photos = Cache::builder()
            .weigher(|_id, photo: &StoredPhoto| {
                u32::try_from(photo.bytes.len()).unwrap_or(u32::MAX)
            })
            .max_capacity(MAX_TOTAL_BYTES)
            .time_to_live(PHOTO_TTL)
            .build();

        Self { photos }
    }

    /// Store a photo and return its id.
    pub async fn insert(&self, photo: StoredPhoto) -> PhotoId {
        let id = PhotoId::new();
        self.photos.insert(id, photo).await;
        id
    }

    /// Fetch a photo for serving.
    pub async fn get(&self, id: PhotoId) -> Option<StoredPhoto> {
        self.photos.get(&id).await
    }

    /// Drop a photo.
    pub async fn remove(&self, id: PhotoId) {
        self.photos.invalidate(&id).await;
    }
}

impl Default for PhotoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = PhotoStore::new();
        let id = store
            .insert(StoredPhoto {
                bytes: Bytes::from_static(b"not really a png"),
                content_type: "image/png".to_string(),
                filename: "living-room.png".to_string(),
            })
            .await;

        let photo = store.get(id).await.unwrap();
        assert_eq!(photo.filename, "living-room.png");
        assert_eq!(photo.content_type, "image/png");
    }

    #[tokio::test]
    async fn test_get_unknown_returns_none() {
        let store = PhotoStore::new();
        assert!(store.get(PhotoId::new()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = PhotoStore::new();
        let id = store
            .insert(StoredPhoto {
                bytes: Bytes::from_static(b"bytes"),
                content_type: "image/jpeg".to_string(),
                filename: "kitchen.jpg".to_string(),
            })
            .await;

        store.remove(id).await;
        assert!(store.get(id).await.is_none());
    }
}
