//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::matcher::Matchmaker;
use crate::services::photos::PhotoStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the matchmaker and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    matchmaker: Matchmaker,
    photos: PhotoStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let matchmaker = Matchmaker::new(config.matching_delay);
        let photos = PhotoStore::new();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                matchmaker,
                photos,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the designer matchmaker.
    #[must_use]
    pub fn matchmaker(&self) -> &Matchmaker {
        &self.inner.matchmaker
    }

    /// Get a reference to the uploaded photo store.
    #[must_use]
    pub fn photos(&self) -> &PhotoStore {
        &self.inner.photos
    }
}
