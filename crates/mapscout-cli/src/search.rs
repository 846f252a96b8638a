//! The resolve → aggregate → print → persist pipeline behind `search` and
//! the interactive session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;

use mapscout_core::taxonomy::CategoryTaxonomy;
use mapscout_core::types::AnchorLocation;
use mapscout_core::AppConfig;
use mapscout_hotspots::{write_report, HotspotAggregator, HotspotReport, HotspotResultSet};
use mapscout_serpapi::{IdKind, SerpApiClient};

/// Number of places shown per category in the console summary. Presentation
/// only; the persisted report always carries the full lists.
const DISPLAY_LIMIT: usize = 10;

pub struct SearchRequest {
    pub identifier: String,
    pub id_type: IdKind,
    pub radius_km: f64,
    pub categories: Option<Vec<String>>,
    pub save: bool,
}

/// Clamps a requested radius to the supported 1-50 km range.
pub fn clamp_radius(radius: u32) -> f64 {
    f64::from(radius.clamp(1, 50))
}

/// Runs one hotspot search end to end.
///
/// A resolution failure is fatal to this run and returned as an error; the
/// interactive session catches it and keeps looping. If the run is
/// interrupted, the partial results are printed but not persisted.
pub async fn run_search(
    config: &AppConfig,
    client: &SerpApiClient,
    taxonomy: &CategoryTaxonomy,
    cancel: &Arc<AtomicBool>,
    request: &SearchRequest,
) -> anyhow::Result<()> {
    cancel.store(false, Ordering::SeqCst);

    let anchor = client
        .resolve_location(&request.identifier, request.id_type)
        .await
        .with_context(|| format!("could not resolve location for '{}'", request.identifier))?;

    println!("Found: {}", anchor.name);
    println!("Location: {}, {}", anchor.latitude, anchor.longitude);
    println!(
        "Searching within {} km of {}\n",
        request.radius_km, anchor.name
    );

    let aggregator =
        HotspotAggregator::new(taxonomy, config.inter_query_delay_ms).with_cancel(Arc::clone(cancel));
    let hotspots = aggregator
        .run(client, &anchor, request.radius_km, request.categories.as_deref())
        .await;

    print_summary(&anchor, &hotspots);

    let interrupted = cancel.load(Ordering::SeqCst);
    if interrupted {
        println!("\nSearch interrupted; partial results above were not saved.");
    } else if request.save {
        let report = HotspotReport::new(anchor, request.radius_km, hotspots);
        match write_report(&report, &config.output_dir) {
            Ok(path) => println!("\nSaved hotspot data to {}", path.display()),
            // In-memory results stay valid; the failure is only reported.
            Err(e) => tracing::error!(error = %e, "failed to persist hotspot report"),
        }
    }

    Ok(())
}

fn print_summary(anchor: &AnchorLocation, hotspots: &HotspotResultSet) {
    let total: usize = hotspots.values().map(Vec::len).sum();
    println!("Total hotspots found: {total}");
    println!("Base location: {}", anchor.address);

    for (category, records) in hotspots {
        if records.is_empty() {
            continue;
        }
        println!(
            "\n{} ({} found)",
            category.replace('_', " ").to_uppercase(),
            records.len()
        );
        for (i, place) in records.iter().take(DISPLAY_LIMIT).enumerate() {
            println!("{:2}. {}", i + 1, place.name);
            println!("    {}", place.address);
            println!("    {} km away", place.distance_km);
            if let Some(rating) = place.rating {
                match place.reviews_count {
                    Some(count) => println!("    rated {rating} ({count} reviews)"),
                    None => println!("    rated {rating}"),
                }
            }
            if let Some(place_type) = &place.place_type {
                println!("    {place_type}");
            }
            if let Some(phone) = &place.phone {
                println!("    {phone}");
            }
            if let Some(website) = &place.website {
                println!("    {website}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_within_range_is_unchanged() {
        assert!((clamp_radius(10) - 10.0).abs() < f64::EPSILON);
        assert!((clamp_radius(1) - 1.0).abs() < f64::EPSILON);
        assert!((clamp_radius(50) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn radius_is_clamped_to_bounds() {
        assert!((clamp_radius(0) - 1.0).abs() < f64::EPSILON);
        assert!((clamp_radius(200) - 50.0).abs() < f64::EPSILON);
    }
}
