//! CLI entry point for kotacom-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kotacom-rs")]
#[command(author = "Kotacom Team")]
#[command(version)]
#[command(about = "Content engine for the Kotacom marketing and blog site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Use the embedded sample content instead of the site directory
    #[arg(long, global = true)]
    sample: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, page, tag, category, recent, featured)
        #[arg(default_value = "post")]
        r#type: String,

        /// Maximum number of entries for recent/featured listings
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search posts, pages, and navigation pages
    Search {
        /// Free-text query; an empty query matches everything
        query: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "kotacom_rs=debug,info"
    } else {
        "kotacom_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    let mut store = if cli.sample {
        kotacom_rs::Site::sample_store()
    } else {
        let site = kotacom_rs::Site::new(&base_dir)?;
        site.store()
    };

    match cli.command {
        Commands::List { r#type, limit } => {
            kotacom_rs::commands::list::run(&mut store, &r#type, limit)?;
        }

        Commands::Search { query } => {
            kotacom_rs::commands::search::run(&mut store, &query)?;
        }

        Commands::Version => {
            println!("kotacom-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
