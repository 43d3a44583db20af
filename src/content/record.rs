//! Normalized content records shared by posts and pages

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// The two content collections the site is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Post,
    Page,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Post => "post",
            Collection::Page => "page",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post or page after normalization.
///
/// Records are normalized exactly once, when a source builds them:
/// optional fields are already defaulted, empty strings collapsed to
/// `None`, and tags guaranteed to be a flat list of non-empty strings.
/// Consumers never re-check field presence.
#[derive(Debug, Clone, Serialize)]
pub struct ContentRecord {
    /// URL-friendly identifier, unique within its collection
    pub slug: String,

    /// Record title
    pub title: String,

    /// Short description used in listings and search results
    pub description: String,

    /// Raw markdown body (searched, never projected into results)
    pub body: String,

    /// Rendered HTML body
    pub content: String,

    /// Optional category
    pub category: Option<String>,

    /// Tags (posts only by convention; empty for pages)
    pub tags: Vec<String>,

    /// Optional author name
    pub author: Option<String>,

    /// Publication date; records without one sort as the epoch
    pub publish_date: Option<DateTime<Local>>,

    /// Last update date
    pub update_date: Option<DateTime<Local>>,

    /// Optional cover image path or URL
    pub image: Option<String>,

    /// Whether the record is surfaced in featured listings
    pub featured: bool,

    /// Whether the record is an unpublished draft
    pub draft: bool,

    /// Source file path (relative), for listings and diagnostics
    pub source: String,
}

impl ContentRecord {
    /// Create a record with the given identity and all other fields defaulted
    pub fn new(slug: &str, title: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            description: String::new(),
            body: String::new(),
            content: String::new(),
            category: None,
            tags: Vec::new(),
            author: None,
            publish_date: None,
            update_date: None,
            image: None,
            featured: false,
            draft: false,
            source: String::new(),
        }
    }

    /// Site-relative URL for this record
    pub fn url(&self) -> String {
        format!("/{}", self.slug)
    }

    /// Ordering key for date sorts; a missing date counts as the epoch
    pub fn date_key(&self) -> i64 {
        self.publish_date.map(|d| d.timestamp()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_url_from_slug() {
        let record = ContentRecord::new("hello-world", "Hello World");
        assert_eq!(record.url(), "/hello-world");
    }

    #[test]
    fn test_date_key_defaults_to_epoch() {
        let mut record = ContentRecord::new("a", "A");
        assert_eq!(record.date_key(), 0);

        record.publish_date = Some(Local.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        assert!(record.date_key() > 0);
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(Collection::Post.as_str(), "post");
        assert_eq!(Collection::Page.to_string(), "page");
    }
}
