//! The looping prompt session: identifier, id type, radius, categories,
//! search, repeat. No error short-circuits the loop; a failed search prints
//! its message and returns to the prompt.

use std::io::{self, BufRead, Write};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use mapscout_core::taxonomy::CategoryTaxonomy;
use mapscout_core::AppConfig;
use mapscout_serpapi::{IdKind, SerpApiClient};

use crate::search::{self, SearchRequest};

pub async fn run(
    config: &AppConfig,
    client: &SerpApiClient,
    taxonomy: &CategoryTaxonomy,
    cancel: &Arc<AtomicBool>,
) -> anyhow::Result<()> {
    println!("mapscout hotspot finder");
    println!("Find interesting places near any restaurant.");

    let stdin = io::stdin();
    loop {
        let Some(identifier) =
            prompt(&stdin, "\nEnter data id or place id (or 'quit' to exit): ")?
        else {
            break;
        };
        if identifier.is_empty() {
            println!("Please enter a valid id.");
            continue;
        }
        if matches!(identifier.to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }

        println!("\nId type:");
        println!("1. Auto-detect (default)");
        println!("2. Data id (format: 0x...)");
        println!("3. Place id");
        let id_type = match prompt(&stdin, "Choose id type (1-3, default 1): ")?.as_deref() {
            Some("2") => IdKind::DataId,
            Some("3") => IdKind::PlaceId,
            _ => IdKind::Auto,
        };

        let radius_km = match prompt(&stdin, "Search radius in km (default 10): ")? {
            None => break,
            Some(raw) => search::clamp_radius(raw.parse::<u32>().unwrap_or(10)),
        };

        println!("\nCategories:");
        println!("1. All categories (default)");
        println!("2. Tourist attractions only");
        println!("3. Restaurants and food only");
        println!("4. Shopping only");
        println!("5. Entertainment only");
        let categories = match prompt(&stdin, "Choose categories (1-5, default 1): ")?.as_deref()
        {
            Some("2") => Some(vec!["tourist_attractions".to_string()]),
            Some("3") => Some(vec!["restaurants".to_string()]),
            Some("4") => Some(vec!["shopping".to_string()]),
            Some("5") => Some(vec!["entertainment".to_string()]),
            _ => None,
        };

        let request = SearchRequest {
            identifier,
            id_type,
            radius_km,
            categories,
            save: true,
        };
        if let Err(e) = search::run_search(config, client, taxonomy, cancel, &request).await {
            println!("Search failed: {e:#}");
        }

        match prompt(&stdin, "\nSearch for another location? (y/n): ")? {
            None => break,
            Some(answer) if answer.to_lowercase().starts_with('n') => break,
            Some(_) => {}
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Prints a prompt and reads one trimmed line. Returns `None` on EOF.
fn prompt(stdin: &io::Stdin, message: &str) -> anyhow::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
