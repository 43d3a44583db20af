//! Content loader - builds the post and page collections from disk

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::store::{ContentSource, FetchError};
use super::{Collection, ContentRecord, FrontMatter, MarkdownRenderer};
use crate::Site;

/// Loads content collections from the site source directory.
///
/// Posts live in `source/_posts`, pages in `source/_pages`. A missing
/// directory is an empty collection, not an error.
pub struct ContentLoader {
    source_dir: PathBuf,
    render_drafts: bool,
    renderer: MarkdownRenderer,
}

impl ContentLoader {
    /// Create a loader for the given site
    pub fn new(site: &Site) -> Self {
        Self {
            source_dir: site.source_dir.clone(),
            render_drafts: site.config.render_drafts,
            renderer: MarkdownRenderer::new(),
        }
    }

    fn load_collection(&self, dir_name: &str) -> Result<Vec<ContentRecord>, FetchError> {
        let dir = self.source_dir.join(dir_name);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();

        for entry in WalkDir::new(&dir).follow_links(true) {
            let entry = entry.map_err(|e| FetchError::Scan {
                path: dir.clone(),
                source: e,
            })?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_record(path) {
                Ok(record) => {
                    if record.draft && !self.render_drafts {
                        tracing::debug!("Skipping draft {}", record.source);
                        continue;
                    }
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                }
            }
        }

        Ok(records)
    }

    /// Load and normalize a single record from a file
    fn load_record(&self, path: &Path) -> Result<ContentRecord, FetchError> {
        let content = fs::read_to_string(path).map_err(|e| FetchError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let (fm, body) = FrontMatter::parse(&content);

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let publish_date = fm.parse_publish_date();
        let update_date = fm.parse_update_date();

        // Title from front-matter or filename
        let title = fm.title.unwrap_or_else(|| stem.to_string());

        let source = path
            .strip_prefix(&self.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let mut record = ContentRecord::new(&slug::slugify(stem), &title);
        record.description = fm.description.unwrap_or_default();
        record.body = body.to_string();
        record.content = self.renderer.render(body);
        record.category = fm.category.filter(|c| !c.is_empty());
        record.tags = fm.tags;
        record.author = fm.author.filter(|a| !a.is_empty());
        record.publish_date = publish_date;
        record.update_date = update_date;
        record.image = fm.image.filter(|i| !i.is_empty());
        record.featured = fm.featured;
        record.draft = fm.draft;
        record.source = source;

        Ok(record)
    }
}

impl ContentSource for ContentLoader {
    fn fetch_collection(&self, kind: Collection) -> Result<Vec<ContentRecord>, FetchError> {
        let dir_name = match kind {
            Collection::Post => "_posts",
            Collection::Page => "_pages",
        };

        let mut records = self.load_collection(dir_name)?;

        match kind {
            // Newest first; undated posts sink to the end
            Collection::Post => records.sort_by(|a, b| b.date_key().cmp(&a.date_key())),
            Collection::Page => records.sort_by(|a, b| a.source.cmp(&b.source)),
        }

        Ok(records)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown" || e == "mdx")
        .unwrap_or(false)
}
