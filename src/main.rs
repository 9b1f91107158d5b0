// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};

use rustydex::APP_ID;
use rustydex::config::Config;
use rustydex::core::api::PokeApi;
use rustydex::core::coordinator::{DetailCoordinator, ListCoordinator};
use rustydex::core::storage::Storage;
use rustydex::entities::PokemonDetail;
use rustydex::utils::{
    artwork_url, capitalize_first, extract_pokemon_id, format_height, format_pokemon_id,
    format_weight,
};

#[derive(Parser)]
#[command(name = "rustydex", about = "A Pokédex in your terminal, backed by PokéAPI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List Pokémon, page by page, reusing the on-disk cache.
    List {
        /// Number of pages to fetch.
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Also fetch and print details for every listed Pokémon.
        #[arg(long)]
        details: bool,
    },
    /// Show the details of a single Pokémon by id or lowercase name.
    Detail { query: String },
    /// Remove the persisted list cache.
    ClearCache,
}

#[tokio::main]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();
    let api = PokeApi::new(&config)?;

    match cli.command {
        Command::List { pages, details } => list(api, &config, pages, details).await,
        Command::Detail { query } => detail(api, &config, &query).await,
        Command::ClearCache => clear_cache().await,
    }
}

async fn list(api: PokeApi, config: &Config, pages: u32, details: bool) -> Result<(), anywho::Error> {
    let storage = Storage::open(APP_ID)?;
    let mut coordinator = ListCoordinator::new(api.clone(), config.page_size);

    if let Some(cached) = storage.load_pokemon_cache().await {
        tracing::debug!("restored {} cached entries", cached.len());
        coordinator.restore(cached);
    }

    for page in 0..pages {
        coordinator.load_page(page * config.page_size).await;
    }

    if let Some(error) = coordinator.cache().error() {
        eprintln!("{error}");
        if !coordinator.has_data() {
            return Ok(());
        }
    }

    for entry in coordinator.pokemon_list() {
        let id = extract_pokemon_id(&entry.url);
        let label = match id.parse::<i64>() {
            Ok(id) => format_pokemon_id(id),
            Err(_) => String::from("#???"),
        };
        println!("{label} {}", capitalize_first(&entry.name));
    }

    if details {
        for detail in api.fetch_details(coordinator.pokemon_list()).await {
            print_detail(config, &detail);
        }
    }

    if !storage.save_pokemon_cache(coordinator.pokemon_list()).await {
        eprintln!("Warning: could not persist the Pokemon cache");
    }

    Ok(())
}

async fn detail(api: PokeApi, config: &Config, query: &str) -> Result<(), anywho::Error> {
    let mut coordinator = DetailCoordinator::new(api);
    coordinator.load(query).await;

    match coordinator.pokemon_detail() {
        Some(detail) => print_detail(config, detail),
        None => {
            if let Some(error) = coordinator.error() {
                eprintln!("{error}");
            }
        }
    }

    Ok(())
}

async fn clear_cache() -> Result<(), anywho::Error> {
    let storage = Storage::open(APP_ID)?;
    if storage.clear_pokemon_cache().await {
        println!("Pokemon cache cleared");
    } else {
        eprintln!("Could not clear the Pokemon cache");
    }
    Ok(())
}

fn print_detail(config: &Config, detail: &PokemonDetail) {
    let types = detail
        .types
        .iter()
        .map(|slot| capitalize_first(&slot.type_info.name))
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "{} {}\n  height: {}\n  weight: {}\n  types: {}\n  artwork: {}",
        format_pokemon_id(detail.id),
        capitalize_first(&detail.name),
        format_height(detail.height),
        format_weight(detail.weight),
        if types.is_empty() { "unknown" } else { &types },
        artwork_url(&config.artwork_base_url, detail.id),
    );
}
