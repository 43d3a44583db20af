//! Free-text search over posts, pages, and the static navigation pages
//!
//! A deterministic linear scan: the query is lowercased and tested as a
//! substring against each searchable field independently. Matches are
//! ranked by title match, then record kind, then date.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::cmp::Ordering;

use crate::content::{ContentRecord, ContentStore};

/// Which collection a search hit came from. Posts rank before pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Post,
    Page,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Post => "post",
            ResultKind::Page => "page",
        }
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked search hit. Body text is searched but never projected here.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub category: String,
    pub date: Option<DateTime<Local>>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub source: &'static str,
}

struct StaticPage {
    title: &'static str,
    url: &'static str,
    description: &'static str,
    category: &'static str,
}

/// The fixed navigational pages, searched alongside the collections
const STATIC_PAGES: [StaticPage; 6] = [
    StaticPage {
        title: "Home",
        url: "/",
        description: "Welcome to Kotacom - Professional IT Services and Web Development",
        category: "Main",
    },
    StaticPage {
        title: "About",
        url: "/about",
        description: "Learn about Kotacom and our mission",
        category: "Main",
    },
    StaticPage {
        title: "Services",
        url: "/services",
        description: "Our comprehensive IT and web development services",
        category: "Services",
    },
    StaticPage {
        title: "Portfolio",
        url: "/portfolio",
        description: "View our completed projects and work samples",
        category: "Portfolio",
    },
    StaticPage {
        title: "Contact",
        url: "/contact",
        description: "Get in touch with our team",
        category: "Contact",
    },
    StaticPage {
        title: "Blog",
        url: "/blog",
        description: "Latest insights, tutorials, and updates",
        category: "Blog",
    },
];

/// Search all content for a free-text query.
///
/// The empty query matches everything. Comparisons are case-insensitive;
/// returned values keep their original casing.
pub fn search(store: &mut ContentStore, query: &str) -> Vec<SearchResult> {
    let term = query.to_lowercase();

    let mut results: Vec<SearchResult> = Vec::new();

    for post in store.posts() {
        if post_matches(post, &term) {
            results.push(record_result(post, ResultKind::Post));
        }
    }

    for page in store.pages() {
        if page_matches(page, &term) {
            results.push(record_result(page, ResultKind::Page));
        }
    }

    for page in &STATIC_PAGES {
        if static_matches(page, &term) {
            results.push(static_result(page));
        }
    }

    results.sort_by(|a, b| compare_results(a, b, &term));
    results
}

fn contains(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

/// Posts match on title, description, body, category, tags, and author.
/// Each field is tested on its own; missing fields count as empty.
fn post_matches(post: &ContentRecord, term: &str) -> bool {
    contains(&post.title, term)
        || contains(&post.description, term)
        || contains(&post.body, term)
        || contains(post.category.as_deref().unwrap_or(""), term)
        || contains(&post.tags.join(" "), term)
        || contains(post.author.as_deref().unwrap_or(""), term)
}

/// Pages match on title, description, and body only
fn page_matches(page: &ContentRecord, term: &str) -> bool {
    contains(&page.title, term)
        || contains(&page.description, term)
        || contains(&page.body, term)
}

fn static_matches(page: &StaticPage, term: &str) -> bool {
    contains(page.title, term)
        || contains(page.description, term)
        || contains(page.category, term)
}

fn record_result(record: &ContentRecord, kind: ResultKind) -> SearchResult {
    let default_category = match kind {
        ResultKind::Post => "Blog",
        ResultKind::Page => "Page",
    };

    SearchResult {
        title: record.title.clone(),
        url: record.url(),
        description: record.description.clone(),
        kind,
        category: record
            .category
            .clone()
            .unwrap_or_else(|| default_category.to_string()),
        date: record.publish_date,
        author: record.author.clone(),
        image: record.image.clone(),
        source: "static",
    }
}

fn static_result(page: &StaticPage) -> SearchResult {
    SearchResult {
        title: page.title.to_string(),
        url: page.url.to_string(),
        description: page.description.to_string(),
        kind: ResultKind::Page,
        category: page.category.to_string(),
        date: None,
        author: None,
        image: None,
        source: "static",
    }
}

/// Ranking: title matches first, then posts before pages, then newer
/// first - but only when both sides carry a date. Remaining ties keep
/// their scan order (posts, pages, static pages).
fn compare_results(a: &SearchResult, b: &SearchResult, term: &str) -> Ordering {
    let a_title = contains(&a.title, term);
    let b_title = contains(&b.title, term);

    b_title
        .cmp(&a_title)
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| match (&a.date, &b.date) {
            (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
            _ => Ordering::Equal,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Collection, ContentSource, FetchError};
    use chrono::TimeZone;

    struct FixedSource {
        posts: Vec<ContentRecord>,
        pages: Vec<ContentRecord>,
    }

    impl ContentSource for FixedSource {
        fn fetch_collection(&self, kind: Collection) -> Result<Vec<ContentRecord>, FetchError> {
            Ok(match kind {
                Collection::Post => self.posts.clone(),
                Collection::Page => self.pages.clone(),
            })
        }
    }

    fn store_with(posts: Vec<ContentRecord>, pages: Vec<ContentRecord>) -> ContentStore {
        ContentStore::new(FixedSource { posts, pages })
    }

    fn record(slug: &str, title: &str) -> ContentRecord {
        let mut record = ContentRecord::new(slug, title);
        record.description = format!("About {}", title);
        record
    }

    fn on(mut record: ContentRecord, year: i32, month: u32, day: u32) -> ContentRecord {
        record.publish_date = Some(Local.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap());
        record
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let posts = vec![record("one", "One"), record("two", "Two")];
        let pages = vec![record("about-us", "About Us")];
        let mut store = store_with(posts, pages);

        let results = search(&mut store, "");

        // 2 posts + 1 page + 6 static pages
        assert_eq!(results.len(), 9);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut post = record("seo-guide", "SEO optimization tips");
        post.publish_date = None;
        let mut store = store_with(vec![post], Vec::new());

        let upper = search(&mut store, "SEO");
        let lower = search(&mut store, "seo");

        let upper_titles: Vec<&str> = upper.iter().map(|r| r.title.as_str()).collect();
        let lower_titles: Vec<&str> = lower.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(upper_titles, lower_titles);
        assert!(upper_titles.contains(&"SEO optimization tips"));
        // Stored casing is untouched
        assert!(upper.iter().all(|r| !r.title.contains("sEO")));
    }

    #[test]
    fn test_title_matches_sort_by_date_descending() {
        let a = on(record("intro-to-caching", "Intro to Caching"), 2024, 1, 1);
        let b = on(record("caching-deep-dive", "Caching Deep Dive"), 2024, 6, 1);
        let mut store = store_with(vec![a, b], Vec::new());

        let results = search(&mut store, "caching");
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();

        assert_eq!(titles, vec!["Caching Deep Dive", "Intro to Caching"]);
    }

    #[test]
    fn test_title_match_beats_type_and_date() {
        // Post matches only in the body; the dateless page matches in
        // the title and must still rank first.
        let mut post = on(record("guide", "Guide"), 2024, 1, 1);
        post.body = "A short seo primer.".to_string();
        let page = record("seo-basics", "SEO Basics");

        let mut store = store_with(vec![post], vec![page]);

        let results = search(&mut store, "seo");
        assert_eq!(results[0].title, "SEO Basics");
        assert_eq!(results[1].title, "Guide");
    }

    #[test]
    fn test_posts_rank_before_pages_on_equal_title_match() {
        let post = record("release-notes", "Release Notes");
        let page = record("release-policy", "Release Policy");
        let mut store = store_with(vec![post], vec![page]);

        let results = search(&mut store, "release");
        assert_eq!(results[0].kind, ResultKind::Post);
        assert_eq!(results[1].kind, ResultKind::Page);
    }

    #[test]
    fn test_dateless_results_keep_scan_order() {
        // Both match in the title, both are posts, only one has a date:
        // the date rule must not apply, so scan order stands.
        let dated = on(record("alpha-notes", "Notes on Alpha"), 2024, 6, 1);
        let undated = record("beta-notes", "Notes on Beta");
        let mut store = store_with(vec![dated, undated], Vec::new());

        let results = search(&mut store, "notes");
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Notes on Alpha", "Notes on Beta"]);
    }

    #[test]
    fn test_posts_match_tags_and_author() {
        let mut by_tag = record("tagged", "Tagged");
        by_tag.tags = vec!["kubernetes".to_string(), "devops".to_string()];
        let mut by_author = record("authored", "Authored");
        by_author.author = Some("Jane Roe".to_string());

        let mut store = store_with(vec![by_tag, by_author], Vec::new());

        assert_eq!(search(&mut store, "devops").len(), 1);
        assert_eq!(search(&mut store, "jane").len(), 1);
    }

    #[test]
    fn test_pages_do_not_match_on_tags_or_author() {
        let mut page = record("team", "Team");
        page.tags = vec!["hiring".to_string()];
        page.author = Some("Jane Roe".to_string());

        let mut store = store_with(Vec::new(), vec![page]);

        assert!(search(&mut store, "hiring").is_empty());
        assert!(search(&mut store, "jane").is_empty());
    }

    #[test]
    fn test_static_pages_match_on_category() {
        let mut store = store_with(Vec::new(), Vec::new());

        let results = search(&mut store, "portfolio");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Portfolio");
        assert_eq!(results[0].url, "/portfolio");
        assert_eq!(results[0].kind, ResultKind::Page);
        assert_eq!(results[0].source, "static");
    }

    #[test]
    fn test_result_projection_defaults_category() {
        let post = record("no-category", "No Category");
        let page = record("plain-page", "Plain Page");
        let mut store = store_with(vec![post], vec![page]);

        let results = search(&mut store, "no category");
        assert_eq!(results[0].category, "Blog");

        let results = search(&mut store, "plain page");
        assert_eq!(results[0].category, "Page");
    }

    #[test]
    fn test_results_never_carry_body() {
        let mut post = record("wordy", "Wordy");
        post.body = "needle in the body".to_string();
        let mut store = store_with(vec![post], Vec::new());

        let results = search(&mut store, "needle");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].description, "About Wordy");
        assert_eq!(results[0].url, "/wordy");
    }
}
