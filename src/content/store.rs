//! Process-lifetime content cache
//!
//! The store memoizes each collection on first access. A fetch failure is
//! logged, degraded to an empty collection, and cached like any other
//! result: the source is not asked again until the caller invalidates.

use std::path::PathBuf;
use thiserror::Error;

use super::{Collection, ContentRecord};

/// Error raised by a content source while fetching a collection
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies content collections to the store
pub trait ContentSource {
    fn fetch_collection(&self, kind: Collection) -> Result<Vec<ContentRecord>, FetchError>;
}

/// Memoized view over a content source.
///
/// One store is built per process (see `Site::store`) and passed by
/// reference to consumers; there is no global cache state.
pub struct ContentStore {
    source: Box<dyn ContentSource>,
    posts: Option<Vec<ContentRecord>>,
    pages: Option<Vec<ContentRecord>>,
}

impl ContentStore {
    /// Create a store over the given source
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            posts: None,
            pages: None,
        }
    }

    /// Get a collection, fetching it on first access.
    ///
    /// A failed fetch yields an empty collection that stays cached for
    /// the lifetime of the store.
    pub fn collection(&mut self, kind: Collection) -> &[ContentRecord] {
        let (slot, source) = match kind {
            Collection::Post => (&mut self.posts, &self.source),
            Collection::Page => (&mut self.pages, &self.source),
        };

        slot.get_or_insert_with(|| match source.fetch_collection(kind) {
            Ok(records) => {
                tracing::debug!("Loaded {} {} records", records.len(), kind);
                records
            }
            Err(e) => {
                tracing::warn!("{} collection not found, using empty set: {}", kind, e);
                Vec::new()
            }
        })
    }

    /// All posts
    pub fn posts(&mut self) -> &[ContentRecord] {
        self.collection(Collection::Post)
    }

    /// All pages
    pub fn pages(&mut self) -> &[ContentRecord] {
        self.collection(Collection::Page)
    }

    /// Drop both cached collections so the next access re-fetches.
    ///
    /// The store never retries on its own; callers that want a retry
    /// strategy layer it on top of this.
    pub fn invalidate(&mut self) {
        self.posts = None;
        self.pages = None;
    }
}
