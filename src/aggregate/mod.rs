//! Derived views over the content store: category and tag counts,
//! recent posts, and featured posts.

use indexmap::IndexMap;
use serde::Serialize;

use crate::content::{ContentRecord, ContentStore};

/// Default number of posts returned by `recent_posts`
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Default number of posts returned by `featured_posts`
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// A category with the number of records carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// A tag with the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// All categories across posts and pages, most frequent first.
///
/// Ties keep the order categories were first encountered in.
pub fn categories(store: &mut ContentStore) -> Vec<CategoryCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for record in store.posts() {
        if let Some(category) = &record.category {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }
    for record in store.pages() {
        if let Some(category) = &record.category {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }

    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// All tags across posts, most frequent first. Pages carry no tags.
pub fn tags(store: &mut ContentStore) -> Vec<TagCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for record in store.posts() {
        for tag in &record.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    let mut result: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// The most recent posts, newest first. Posts without a publish date
/// sort as the epoch.
pub fn recent_posts(store: &mut ContentStore, limit: Option<usize>) -> Vec<ContentRecord> {
    let mut posts = store.posts().to_vec();
    posts.sort_by(|a, b| b.date_key().cmp(&a.date_key()));
    posts.truncate(limit.unwrap_or(DEFAULT_RECENT_LIMIT));
    posts
}

/// The most recent featured posts, newest first
pub fn featured_posts(store: &mut ContentStore, limit: Option<usize>) -> Vec<ContentRecord> {
    let mut posts: Vec<ContentRecord> = store
        .posts()
        .iter()
        .filter(|p| p.featured)
        .cloned()
        .collect();
    posts.sort_by(|a, b| b.date_key().cmp(&a.date_key()));
    posts.truncate(limit.unwrap_or(DEFAULT_FEATURED_LIMIT));
    posts
}
