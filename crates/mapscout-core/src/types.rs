//! Domain types shared across the mapscout crates.
//!
//! A raw API hit is decoded into a [`PlaceHit`]; the aggregator turns
//! surviving hits into immutable [`PlaceRecord`]s. Serialized field names on
//! [`PlaceRecord`] and [`AnchorLocation`] match the persisted report format.

use serde::{Deserialize, Serialize};

/// A WGS-84 point. Both components must be finite; hits without a usable
/// coordinate are dropped before one of these is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One raw search hit after wire decoding, before distance filtering and
/// normalization. `coordinate` is `None` when the API returned no GPS data,
/// which makes the hit unusable.
#[derive(Debug, Clone)]
pub struct PlaceHit {
    pub name: String,
    pub address: String,
    pub coordinate: Option<Coordinate>,
    pub rating: Option<f64>,
    pub reviews_count: Option<i64>,
    pub price_level: Option<String>,
    pub place_type: Option<String>,
    pub data_id: Option<String>,
    pub place_id: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub hours: Option<serde_json::Value>,
}

/// A normalized hotspot record. Immutable once created; never mutated after
/// being placed into a result list.
///
/// `category` in the serialized form carries the query term that produced the
/// hit, matching the persisted report format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub reviews_count: Option<i64>,
    pub price_level: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    pub data_id: Option<String>,
    pub place_id: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub hours: Option<serde_json::Value>,
    #[serde(rename = "category")]
    pub search_query: String,
}

impl PlaceRecord {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// The resolved center point from which all distances are measured.
/// Resolved once per search; read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorLocation {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub reviews_count: Option<i64>,
    pub data_id: Option<String>,
    pub place_id: Option<String>,
}

impl AnchorLocation {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
