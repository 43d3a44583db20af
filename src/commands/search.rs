//! Search site content

use anyhow::Result;

use crate::content::ContentStore;
use crate::helpers::{format_date, strip_html};
use crate::search;

/// Run a search query and print the ranked results
pub fn run(store: &mut ContentStore, query: &str) -> Result<()> {
    let results = search::search(store, query);

    println!("Results for \"{}\" ({}):", query, results.len());
    for result in results {
        let date = result
            .date
            .map(|d| format!(" - {}", format_date(&d)))
            .unwrap_or_default();
        println!(
            "  [{}] {} ({}){}",
            result.kind,
            result.title,
            result.url,
            date
        );
        if !result.description.is_empty() {
            println!("      {}", strip_html(&result.description, Some(96)));
        }
    }

    Ok(())
}
