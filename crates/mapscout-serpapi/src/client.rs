//! HTTP client for the SerpApi Google Maps engines.
//!
//! Every response body is checked for the top-level `"error"` field first and
//! surfaced as [`SerpApiError::Api`]. Responses that parse but carry no
//! usable place or coordinate data become [`SerpApiError::NotFound`].

use std::time::Duration;

use reqwest::{Client, Url};

use mapscout_core::types::{AnchorLocation, Coordinate, PlaceHit};
use mapscout_core::PlaceSearch;

use crate::error::SerpApiError;
use crate::types::{LocalResult, MapsSearchResponse, ReviewsData};

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search";

/// How a place identifier should be interpreted when resolving an anchor
/// location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Detect from the identifier's shape: containing `:` or starting with
    /// `0x` means a data id, anything else a place id.
    Auto,
    DataId,
    PlaceId,
}

/// Returns `true` when an identifier looks like a Google Maps data id
/// (e.g. `0x3bae19…:0x9868…`) rather than a place id.
fn looks_like_data_id(identifier: &str) -> bool {
    identifier.starts_with("0x") || identifier.contains(':')
}

/// Client for the SerpApi REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`SerpApiClient::new`]
/// for production or [`SerpApiClient::with_base_url`] to point at a mock
/// server in tests.
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl SerpApiClient {
    /// Creates a new client pointed at the production SerpApi endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SerpApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SerpApiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SerpApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SerpApiError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SerpApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mapscout/0.1 (hotspot-analysis)")
            .build()?;

        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| SerpApiError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves a data id or place id into an [`AnchorLocation`].
    ///
    /// With [`IdKind::Auto`], an identifier containing `:` or starting with
    /// `0x` is treated as a data id, anything else as a place id. A data id
    /// is resolved through the `google_maps_reviews` engine (anchor read from
    /// `place_info`), a place id through the `google_maps` engine (anchor
    /// read from the first `local_results` entry).
    ///
    /// # Errors
    ///
    /// - [`SerpApiError::NotFound`] if the response carries no place record
    ///   or the record has no GPS coordinates.
    /// - [`SerpApiError::Api`] if the API returns an error message.
    /// - [`SerpApiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SerpApiError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn resolve_location(
        &self,
        identifier: &str,
        kind: IdKind,
    ) -> Result<AnchorLocation, SerpApiError> {
        let treat_as_data_id = match kind {
            IdKind::DataId => true,
            IdKind::PlaceId => false,
            IdKind::Auto => looks_like_data_id(identifier),
        };

        if treat_as_data_id {
            self.resolve_by_data_id(identifier).await
        } else {
            self.resolve_by_place_id(identifier).await
        }
    }

    async fn resolve_by_data_id(&self, data_id: &str) -> Result<AnchorLocation, SerpApiError> {
        let url = self.build_url("google_maps_reviews", &[("data_id", data_id)]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ReviewsData =
            serde_json::from_value(body).map_err(|e| SerpApiError::Deserialize {
                context: format!("resolve_location(data_id={data_id})"),
                source: e,
            })?;

        let info = envelope.place_info.ok_or_else(|| {
            SerpApiError::NotFound(format!("no place information for data id {data_id}"))
        })?;

        let coordinate = info
            .gps_coordinates
            .as_ref()
            .and_then(crate::types::GpsCoordinates::coordinate)
            .ok_or_else(|| {
                SerpApiError::NotFound(format!("no GPS coordinates for data id {data_id}"))
            })?;

        Ok(AnchorLocation {
            name: info.title.unwrap_or_else(|| "Unknown Restaurant".to_string()),
            address: info
                .address
                .unwrap_or_else(|| "Unknown Address".to_string()),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            rating: info.rating,
            reviews_count: info.reviews,
            data_id: Some(data_id.to_owned()),
            place_id: info.place_id,
        })
    }

    async fn resolve_by_place_id(&self, place_id: &str) -> Result<AnchorLocation, SerpApiError> {
        let url = self.build_url("google_maps", &[("place_id", place_id)]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: MapsSearchResponse =
            serde_json::from_value(body).map_err(|e| SerpApiError::Deserialize {
                context: format!("resolve_location(place_id={place_id})"),
                source: e,
            })?;

        let first = envelope.local_results.into_iter().next().ok_or_else(|| {
            SerpApiError::NotFound(format!("no results for place id {place_id}"))
        })?;

        let result: LocalResult =
            serde_json::from_value(first).map_err(|e| SerpApiError::Deserialize {
                context: format!("resolve_location(place_id={place_id})"),
                source: e,
            })?;

        let coordinate = result
            .gps_coordinates
            .as_ref()
            .and_then(crate::types::GpsCoordinates::coordinate)
            .ok_or_else(|| {
                SerpApiError::NotFound(format!("no GPS coordinates for place id {place_id}"))
            })?;

        Ok(AnchorLocation {
            name: result
                .title
                .unwrap_or_else(|| "Unknown Restaurant".to_string()),
            address: result
                .address
                .unwrap_or_else(|| "Unknown Address".to_string()),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            rating: result.rating,
            reviews_count: result.reviews,
            data_id: result.data_id,
            place_id: Some(place_id.to_owned()),
        })
    }

    /// Fetches the reviews for a place by data id.
    ///
    /// # Errors
    ///
    /// - [`SerpApiError::NotFound`] if the response carries no reviews.
    /// - [`SerpApiError::Api`] if the API returns an error message.
    /// - [`SerpApiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SerpApiError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_reviews(
        &self,
        data_id: &str,
        language: &str,
    ) -> Result<ReviewsData, SerpApiError> {
        let url = self.build_url(
            "google_maps_reviews",
            &[("data_id", data_id), ("hl", language)],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ReviewsData =
            serde_json::from_value(body).map_err(|e| SerpApiError::Deserialize {
                context: format!("fetch_reviews(data_id={data_id})"),
                source: e,
            })?;

        if envelope.reviews.is_empty() {
            return Err(SerpApiError::NotFound(format!(
                "no reviews for data id {data_id}"
            )));
        }

        Ok(envelope)
    }

    /// Builds the full request URL with properly percent-encoded query parameters.
    fn build_url(&self, engine: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            pairs.append_pair("engine", engine);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, SerpApiError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SerpApiError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"error"` field and returns an error if present.
    fn check_api_error(body: &serde_json::Value) -> Result<(), SerpApiError> {
        if let Some(message) = body.get("error").and_then(serde_json::Value::as_str) {
            return Err(SerpApiError::Api(message.to_string()));
        }
        Ok(())
    }
}

impl PlaceSearch for SerpApiClient {
    type Error = SerpApiError;

    /// Searches for places near `center` matching `query`.
    ///
    /// Calls the `google_maps` engine with an `ll=@lat,lon,<radius>km`
    /// viewport. Entries that fail to decode individually are logged and
    /// skipped rather than failing the whole call. The returned list may be
    /// empty; the backend's radius handling is advisory and callers re-filter
    /// by true distance.
    async fn search_nearby(
        &self,
        center: Coordinate,
        query: &str,
        radius_km: f64,
    ) -> Result<Vec<PlaceHit>, SerpApiError> {
        let ll = format!("@{},{},{}km", center.latitude, center.longitude, radius_km);
        let url = self.build_url("google_maps", &[("q", query), ("ll", &ll), ("type", "search")]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: MapsSearchResponse =
            serde_json::from_value(body).map_err(|e| SerpApiError::Deserialize {
                context: format!("search_nearby(query={query})"),
                source: e,
            })?;

        let hits = envelope
            .local_results
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<LocalResult>(value) {
                Ok(result) => Some(PlaceHit::from(result)),
                Err(e) => {
                    tracing::warn!(query, error = %e, "skipping undecodable local result");
                    None
                }
            })
            .collect();

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> SerpApiClient {
        SerpApiClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn detects_data_id_from_hex_prefix() {
        assert!(looks_like_data_id("0x3bae193ae55bccef:0x9868969a476d8ec3"));
        assert!(looks_like_data_id("0xdeadbeef"));
    }

    #[test]
    fn detects_data_id_from_colon() {
        assert!(looks_like_data_id("abc:def"));
    }

    #[test]
    fn plain_identifier_is_a_place_id() {
        assert!(!looks_like_data_id("ChIJN1t_tDeuEmsRUsoyG83frY4"));
    }

    #[test]
    fn build_url_constructs_correct_query_string() {
        let client = test_client("https://serpapi.com/search");
        let url = client.build_url("google_maps", &[("place_id", "abc")]);
        assert_eq!(
            url.as_str(),
            "https://serpapi.com/search?api_key=test-key&engine=google_maps&place_id=abc"
        );
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("https://serpapi.com/search");
        let url = client.build_url("google_maps", &[("q", "food court")]);
        assert!(
            url.as_str().contains("food+court") || url.as_str().contains("food%20court"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn build_url_strips_trailing_slash() {
        let client = test_client("https://serpapi.com/search/");
        let url = client.build_url("google_maps", &[]);
        assert_eq!(
            url.as_str(),
            "https://serpapi.com/search?api_key=test-key&engine=google_maps"
        );
    }
}
