mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde_json::{Map, Value};

use cli::{Cli, Commands, FavoritesAction};
use hallowtales::catalog::SearchOutcome;
use hallowtales::config::AppConfig;
use hallowtales::favorites::{Category, FavoriteEntry};
use hallowtales::telemetry::init_tracing;
use hallowtales::translate::translate;
use hallowtales::types::CatalogRecord;
use hallowtales::HallowTales;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Commands::Translate { title } = &cli.command {
        println!("{}", translate(title));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };
    let app = HallowTales::connect(config).await?;

    match cli.command {
        Commands::Books { search, recommended } => {
            if recommended {
                for r in app.catalog().recommended_books().await {
                    print_record(&r);
                }
            } else if let Some(q) = search {
                print_outcome(app.catalog().search_books(&q).await);
            } else {
                for b in app.catalog().books_with_badges().await {
                    let badge = b.recommended.as_ref().map(|r| format!(" [recomendado: {}]", r.id)).unwrap_or_default();
                    println!("{} | {} | {} | {}{}", b.record.id, b.record.title, b.record.creators, b.record.year_label(), badge);
                }
            }
        }
        Commands::Series { search } => match search {
            Some(q) => print_outcome(app.catalog().search_series(&q).await),
            None => {
                for r in app.catalog().series().await {
                    print_record(&r);
                }
            }
        },
        Commands::Favorites { action } => run_favorites(&app, action).await?,
        Commands::Translate { .. } => {}
    }
    Ok(())
}

async fn run_favorites(app: &HallowTales, action: FavoritesAction) -> Result<()> {
    let favs = app.favorites();
    match action {
        FavoritesAction::List { category: Some(name) } => {
            for e in favs.list_named(&name).await? {
                print_favorite(&name, &e);
            }
        }
        FavoritesAction::List { category: None } => {
            for c in Category::ALL {
                for e in favs.list(c).await? {
                    print_favorite(c.key(), &e);
                }
            }
        }
        FavoritesAction::Add { category, id, title } => {
            let added = favs.add(category.parse()?, &id, title_data(title)).await?;
            println!("{}", if added { "added" } else { "already a favorite" });
        }
        FavoritesAction::Remove { category, id } => {
            favs.remove(category.parse()?, &id).await?;
            println!("removed");
        }
        FavoritesAction::Toggle { category, id, title } => {
            let now = favs.toggle(category.parse()?, &id, title_data(title)).await?;
            println!("{}", if now { "favorited" } else { "unfavorited" });
        }
        FavoritesAction::Count => println!("{}", favs.count().await?),
        FavoritesAction::Export { dir } => {
            let path = favs.export_to_dir(&dir.unwrap_or_else(|| PathBuf::from("."))).await?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn print_favorite(category: &str, e: &FavoriteEntry) {
    println!("{} | {} | {} | {}", category, e.id, e.title(), e.added_at.to_rfc3339());
}

fn title_data(title: Option<String>) -> Map<String, Value> {
    let mut data = Map::new();
    if let Some(t) = title {
        data.insert("titulo".into(), Value::String(t));
    }
    data
}

fn print_record(r: &CatalogRecord) {
    let provider = r.streaming_provider().map(|p| format!(" | {p}")).unwrap_or_default();
    println!("{} | {} | {} | {}{}", r.id, r.title, r.creators, r.year_label(), provider);
}

fn print_outcome(outcome: SearchOutcome) {
    match outcome {
        SearchOutcome::Found(records) => records.iter().for_each(print_record),
        SearchOutcome::NoResults { term } => println!("Nenhum resultado para \"{term}\""),
    }
}
