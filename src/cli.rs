use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Developer harness for poking at the catalogs and favorites
#[derive(Parser)]
#[command(name = "hallowtales")]
#[command(about = "Inspect horror catalogs and manage favorites", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List or search the books catalog
    Books {
        #[arg(short, long)]
        search: Option<String>,
        /// Show the curated shortlist instead
        #[arg(long)]
        recommended: bool,
    },
    /// List or search the series catalog
    Series {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Run a title through the translator
    Translate { title: String },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List one category, or all of them
    List { category: Option<String> },
    Add {
        category: String,
        id: String,
        #[arg(short, long)]
        title: Option<String>,
    },
    Remove { category: String, id: String },
    Toggle {
        category: String,
        id: String,
        #[arg(short, long)]
        title: Option<String>,
    },
    Count,
    /// Write the export file into a directory (current dir by default)
    Export {
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}
