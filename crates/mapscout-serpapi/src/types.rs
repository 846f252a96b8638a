//! SerpApi response types.
//!
//! All types model the JSON structures returned by the SerpApi Google Maps
//! engines. Fields the API may omit are `Option` with `#[serde(default)]` —
//! a missing rating or review count stays absent rather than being replaced
//! by a sentinel value.

use serde::{Deserialize, Serialize};

use mapscout_core::types::{Coordinate, PlaceHit};

/// GPS coordinates as returned by SerpApi. Either component may be missing,
/// which makes the containing place unusable for distance math.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpsCoordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl GpsCoordinates {
    /// Returns a [`Coordinate`] only when both components are present and finite.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Coordinate::new(lat, lon))
            }
            _ => None,
        }
    }
}

/// Envelope for `google_maps` search and place-id responses.
#[derive(Debug, Deserialize)]
pub struct MapsSearchResponse {
    /// Entries are kept as raw values; callers deserialize each one
    /// individually and skip those that fail.
    #[serde(default)]
    pub local_results: Vec<serde_json::Value>,
}

/// A single `local_results` entry from the `google_maps` engine.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gps_coordinates: Option<GpsCoordinates>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<i64>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default, rename = "type")]
    pub place_type: Option<String>,
    #[serde(default)]
    pub data_id: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub hours: Option<serde_json::Value>,
}

impl From<LocalResult> for PlaceHit {
    fn from(result: LocalResult) -> Self {
        PlaceHit {
            name: result.title.unwrap_or_else(|| "Unknown".to_string()),
            address: result
                .address
                .unwrap_or_else(|| "Unknown Address".to_string()),
            coordinate: result.gps_coordinates.as_ref().and_then(GpsCoordinates::coordinate),
            rating: result.rating,
            reviews_count: result.reviews,
            price_level: result.price,
            place_type: result.place_type,
            data_id: result.data_id,
            place_id: result.place_id,
            phone: result.phone,
            website: result.website,
            hours: result.hours,
        }
    }
}

/// Envelope for `google_maps_reviews` responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsData {
    #[serde(default)]
    pub place_info: Option<PlaceInfo>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Place metadata from the `google_maps_reviews` engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gps_coordinates: Option<GpsCoordinates>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<i64>,
    #[serde(default)]
    pub place_id: Option<String>,
}

/// A single user review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub user: Option<ReviewUser>,
    #[serde(default)]
    pub snippet: Option<String>,
    /// Free-form attribute map (e.g. service, food, atmosphere scores).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// The owner's reply, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ReviewReply>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewUser {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewReply {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}
