//! The hotspot aggregation loop.
//!
//! One category at a time, one query term at a time, one external call at a
//! time. The only scheduling concern is a fixed pacing sleep between
//! successive external calls; a per-term failure is logged and skipped, never
//! aborting the category or the run.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mapscout_core::taxonomy::{Category, CategoryTaxonomy};
use mapscout_core::types::{AnchorLocation, Coordinate, PlaceHit, PlaceRecord};
use mapscout_core::{geo, PlaceSearch};

/// Category name → records sorted ascending by distance, duplicates removed.
/// Built fresh per search invocation and fully owned by the caller.
pub type HotspotResultSet = BTreeMap<String, Vec<PlaceRecord>>;

/// Orchestrates repeated nearby searches across the taxonomy.
pub struct HotspotAggregator<'a> {
    taxonomy: &'a CategoryTaxonomy,
    inter_query_delay_ms: u64,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> HotspotAggregator<'a> {
    #[must_use]
    pub fn new(taxonomy: &'a CategoryTaxonomy, inter_query_delay_ms: u64) -> Self {
        Self {
            taxonomy,
            inter_query_delay_ms,
            cancel: None,
        }
    }

    /// Attaches a cancellation flag. Once set, no further external calls are
    /// made; the partial result accumulated so far is returned.
    #[must_use]
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Finds all hotspots around `anchor` within `radius_km`.
    ///
    /// `categories` selects a subset of taxonomy categories by name
    /// (case-insensitive); `None` processes the whole taxonomy in order.
    /// Requested names not present in the taxonomy are warned about and
    /// skipped. Every processed category appears in the result, empty list
    /// included. The client's own radius handling is advisory: every hit is
    /// re-filtered by true great-circle distance, and hits strictly beyond
    /// `radius_km` or without coordinates are dropped.
    pub async fn run<C: PlaceSearch>(
        &self,
        client: &C,
        anchor: &AnchorLocation,
        radius_km: f64,
        categories: Option<&[String]>,
    ) -> HotspotResultSet {
        let selected = self.select_categories(categories);
        let center = anchor.coordinate();

        let mut results: HotspotResultSet = BTreeMap::new();
        let mut first_call = true;

        'categories: for category in selected {
            tracing::info!(category = %category.name, "searching category");
            let records: &mut Vec<PlaceRecord> = results.entry(category.name.clone()).or_default();

            for query in &category.queries {
                if self.cancelled() {
                    tracing::warn!("search cancelled, returning partial results");
                    break 'categories;
                }

                if !first_call && self.inter_query_delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(self.inter_query_delay_ms)).await;
                }
                first_call = false;

                let hits = match client.search_nearby(center, query, radius_km).await {
                    Ok(hits) => hits,
                    Err(e) => {
                        tracing::warn!(query = %query, error = %e, "query failed, skipping term");
                        continue;
                    }
                };

                for hit in hits {
                    let Some(coordinate) = hit.coordinate else {
                        continue;
                    };
                    let distance = geo::distance_km(center, coordinate);
                    if distance > radius_km {
                        continue;
                    }
                    if is_duplicate(records, &hit) {
                        continue;
                    }
                    records.push(normalize(hit, coordinate, distance, query));
                }
            }
        }

        for records in results.values_mut() {
            // Stable sort: ties keep first-seen order.
            records.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        }

        let total: usize = results.values().map(Vec::len).sum();
        tracing::info!(total, categories = results.len(), "hotspot search complete");

        results
    }

    fn select_categories(&self, categories: Option<&[String]>) -> Vec<&'a Category> {
        match categories {
            None => self.taxonomy.categories().collect(),
            Some(names) => names
                .iter()
                .filter_map(|name| {
                    let found = self.taxonomy.get(name);
                    if found.is_none() {
                        tracing::warn!(category = %name, "unknown category, skipping");
                    }
                    found
                })
                .collect(),
        }
    }
}

/// Two records are duplicates when both name and address match after
/// lowercasing. Exact comparison only; near-duplicates with formatting
/// differences are kept.
fn is_duplicate(records: &[PlaceRecord], hit: &PlaceHit) -> bool {
    let name = hit.name.to_lowercase();
    let address = hit.address.to_lowercase();
    records
        .iter()
        .any(|r| r.name.to_lowercase() == name && r.address.to_lowercase() == address)
}

fn normalize(hit: PlaceHit, coordinate: Coordinate, distance_km: f64, query: &str) -> PlaceRecord {
    PlaceRecord {
        name: hit.name,
        address: hit.address,
        rating: hit.rating,
        reviews_count: hit.reviews_count,
        price_level: hit.price_level,
        place_type: hit.place_type,
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
        distance_km: (distance_km * 100.0).round() / 100.0,
        data_id: hit.data_id,
        place_id: hit.place_id,
        phone: hit.phone,
        website: hit.website,
        hours: hit.hours,
        search_query: query.to_owned(),
    }
}
