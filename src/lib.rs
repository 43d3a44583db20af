//! kotacom-rs: content engine for the Kotacom marketing and blog site
//!
//! This crate loads the post and page collections, caches them for the
//! lifetime of a build, and derives the aggregated and searchable views
//! the rendering layer consumes.

pub mod aggregate;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod search;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, ContentStore, SampleSource};

/// The site context: configuration plus content locations
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory
    pub source_dir: PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
        })
    }

    /// Build a content store backed by this site's source directory
    pub fn store(&self) -> ContentStore {
        ContentStore::new(ContentLoader::new(self))
    }

    /// Build a content store over the embedded sample content
    pub fn sample_store() -> ContentStore {
        ContentStore::new(SampleSource::new())
    }
}
