//! The `reviews` subcommand: fetch, print, and persist reviews for a place.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use mapscout_core::AppConfig;
use mapscout_hotspots::report::sanitize_name;
use mapscout_serpapi::{ReviewsData, SerpApiClient};

pub async fn run_reviews(
    config: &AppConfig,
    client: &SerpApiClient,
    data_id: &str,
    language: Option<&str>,
    save: bool,
) -> anyhow::Result<()> {
    let language = language.unwrap_or(&config.reviews_language);
    let data = client
        .fetch_reviews(data_id, language)
        .await
        .with_context(|| format!("could not fetch reviews for '{data_id}'"))?;

    print_reviews(&data);

    if save {
        let path = save_reviews(&data, data_id, &config.output_dir)?;
        println!("\nSaved review data to {}", path.display());
    }

    Ok(())
}

fn print_reviews(data: &ReviewsData) {
    let name = data
        .place_info
        .as_ref()
        .and_then(|p| p.title.as_deref())
        .unwrap_or("unknown place");
    let address = data
        .place_info
        .as_ref()
        .and_then(|p| p.address.as_deref())
        .unwrap_or("address not available");

    println!("Reviews for {name}");
    println!("Address: {address}");
    println!("Found {} reviews", data.reviews.len());

    for (i, review) in data.reviews.iter().enumerate() {
        println!("\nReview #{}", i + 1);
        if let Some(rating) = review.rating {
            println!("Rating: {rating} stars");
        }
        if let Some(date) = &review.date {
            println!("Date: {date}");
        }
        if let Some(user) = review.user.as_ref().and_then(|u| u.name.as_deref()) {
            println!("User: {user}");
        }
        if let Some(snippet) = &review.snippet {
            println!("{snippet}");
        }
        if let Some(serde_json::Value::Object(details)) = &review.details {
            println!("Details:");
            for (key, value) in details {
                match value.as_str() {
                    Some(s) => println!("  {key}: {s}"),
                    None => println!("  {key}: {value}"),
                }
            }
        }
        if let Some(reply) = &review.response {
            println!("Owner response:");
            if let Some(date) = &reply.date {
                println!("  Date: {date}");
            }
            if let Some(snippet) = &reply.snippet {
                println!("  {snippet}");
            }
        }
    }
}

fn save_reviews(data: &ReviewsData, data_id: &str, out_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("could not create {}", out_dir.display()))?;

    let name = data
        .place_info
        .as_ref()
        .and_then(|p| p.title.as_deref())
        .map_or_else(|| sanitize_name(data_id), sanitize_name);
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let path = out_dir.join(format!("reviews_{name}_{timestamp}.json"));

    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(&path, json).with_context(|| format!("could not write {}", path.display()))?;

    Ok(path)
}
