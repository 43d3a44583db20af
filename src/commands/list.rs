//! List site content

use anyhow::Result;

use crate::aggregate;
use crate::content::ContentStore;
use crate::helpers::format_date;

/// List site content by type
pub fn run(store: &mut ContentStore, content_type: &str, limit: Option<usize>) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = store.posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                let date = post
                    .publish_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "----------".to_string());
                println!("  {} - {} [{}]", date, post.title, post.source);
            }
        }
        "page" | "pages" => {
            let pages = store.pages();
            println!("Pages ({}):", pages.len());
            for page in pages {
                println!("  {} [{}]", page.title, page.source);
            }
        }
        "tag" | "tags" => {
            let tags = aggregate::tags(store);
            println!("Tags ({}):", tags.len());
            for entry in tags {
                println!("  {} ({})", entry.tag, entry.count);
            }
        }
        "category" | "categories" => {
            let categories = aggregate::categories(store);
            println!("Categories ({}):", categories.len());
            for entry in categories {
                println!("  {} ({})", entry.category, entry.count);
            }
        }
        "recent" => {
            let posts = aggregate::recent_posts(store, limit);
            println!("Recent posts ({}):", posts.len());
            for post in posts {
                let date = post
                    .publish_date
                    .map(|d| format_date(&d))
                    .unwrap_or_default();
                println!("  {} - {}", post.title, date);
            }
        }
        "featured" => {
            let posts = aggregate::featured_posts(store, limit);
            println!("Featured posts ({}):", posts.len());
            for post in posts {
                let date = post
                    .publish_date
                    .map(|d| format_date(&d))
                    .unwrap_or_default();
                println!("  {} - {}", post.title, date);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, tag, category, recent, featured",
                content_type
            );
        }
    }

    Ok(())
}
