//! Built-in sample content
//!
//! A small embedded post collection so the CLI can run without a site
//! directory. Mirrors the starter content shipped with the site.

use super::frontmatter::parse_date_string;
use super::store::{ContentSource, FetchError};
use super::{Collection, ContentRecord, MarkdownRenderer};

struct SamplePost {
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    date: &'static str,
    author: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    featured: bool,
    body: &'static str,
}

const SAMPLE_POSTS: [SamplePost; 3] = [
    SamplePost {
        slug: "post-from-html-file-example",
        title: "Post from HTML File Example",
        description: "This is an example post demonstrating how to create blog posts from HTML files.",
        date: "2024-01-15",
        author: "Kotacom Team",
        category: "Technology",
        tags: &["web-development", "static-sites", "performance"],
        featured: false,
        body: "\
## Welcome to Our Blog

This is a sample blog post that demonstrates how to create content using \
static files. This approach is much faster than fetching data from external \
APIs.

### Why Static Content?

- **Speed:** no API calls needed, pages load instantly
- **Reliability:** no dependency on external services
- **SEO:** better search engine optimization
- **Cost:** no server costs for content delivery

Each blog post is defined as a static record with all the necessary data, \
eliminating database queries and API calls during build time.
",
    },
    SamplePost {
        slug: "web-development-best-practices",
        title: "Web Development Best Practices for 2024",
        description: "Learn the essential best practices for modern web development that will help you build better, faster, and more maintainable websites.",
        date: "2024-01-20",
        author: "Kotacom Team",
        category: "Web Development",
        tags: &["best-practices", "performance", "accessibility", "security"],
        featured: true,
        body: "\
## Web Development Best Practices for 2024

As we move further into 2024, web development continues to evolve rapidly. \
Here are the essential best practices every developer should follow.

### 1. Performance First

Users expect fast-loading websites, and search engines favor speed in their \
rankings. Optimize images, minimize HTTP requests, use lazy loading, and \
implement proper caching strategies.

### 2. Mobile-First Design

Start with mobile layouts and progressively enhance for larger screens so \
your site works well on all devices.

### 3. Accessibility Matters

Use semantic HTML, provide alt text for images, ensure proper color \
contrast, and make your site keyboard navigable.

### 4. Security Best Practices

Use HTTPS everywhere, validate input, keep dependencies updated, and set \
security headers.
",
    },
    SamplePost {
        slug: "seo-optimization-guide",
        title: "Complete SEO Optimization Guide for 2024",
        description: "Master the art of SEO with this comprehensive guide covering technical SEO, content optimization, and modern search engine strategies.",
        date: "2024-01-25",
        author: "Kotacom Team",
        category: "Marketing",
        tags: &["seo", "marketing", "optimization", "search-engines"],
        featured: false,
        body: "\
## Complete SEO Optimization Guide for 2024

Search Engine Optimization (SEO) is crucial for driving organic traffic to \
your website. Here is your complete guide to SEO success in 2024.

### Technical SEO

Page speed is a critical ranking factor: compress images, minimize CSS and \
JavaScript, use a CDN, and implement browser caching. Google uses \
mobile-first indexing, so the mobile site must be optimized as well.

### Content Optimization

High-quality, relevant content is the backbone of SEO success. Research \
keywords, answer real questions, and keep content fresh.
",
    },
];

/// Content source backed by the embedded sample posts
pub struct SampleSource {
    renderer: MarkdownRenderer,
}

impl SampleSource {
    pub fn new() -> Self {
        Self {
            renderer: MarkdownRenderer::new(),
        }
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for SampleSource {
    fn fetch_collection(&self, kind: Collection) -> Result<Vec<ContentRecord>, FetchError> {
        match kind {
            Collection::Post => Ok(SAMPLE_POSTS
                .iter()
                .map(|sample| {
                    let mut record = ContentRecord::new(sample.slug, sample.title);
                    record.description = sample.description.to_string();
                    record.body = sample.body.to_string();
                    record.content = self.renderer.render(sample.body);
                    record.category = Some(sample.category.to_string());
                    record.tags = sample.tags.iter().map(|t| t.to_string()).collect();
                    record.author = Some(sample.author.to_string());
                    record.publish_date = parse_date_string(sample.date);
                    record.featured = sample.featured;
                    record.source = format!("sample/{}.md", sample.slug);
                    record
                })
                .collect()),
            Collection::Page => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_posts_load() {
        let source = SampleSource::new();
        let posts = source.fetch_collection(Collection::Post).unwrap();

        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|p| p.publish_date.is_some()));
        assert!(posts.iter().any(|p| p.featured));
        assert!(posts
            .iter()
            .any(|p| p.tags.iter().any(|t| t == "seo")));
    }

    #[test]
    fn test_sample_pages_empty() {
        let source = SampleSource::new();
        assert!(source.fetch_collection(Collection::Page).unwrap().is_empty());
    }
}
