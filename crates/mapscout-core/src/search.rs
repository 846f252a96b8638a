//! The seam between hotspot aggregation and the concrete search API client.

use std::fmt::Display;
use std::future::Future;

use crate::types::{Coordinate, PlaceHit};

/// A "search places near a point matching a query" collaborator.
///
/// Implemented by the production SerpApi client and by stub clients in
/// aggregator tests. The radius passed to the backend is advisory; callers
/// re-filter hits by true great-circle distance.
pub trait PlaceSearch {
    type Error: Display + Send;

    /// Searches for places near `center` matching `query` within roughly
    /// `radius_km` kilometers.
    fn search_nearby(
        &self,
        center: Coordinate,
        query: &str,
        radius_km: f64,
    ) -> impl Future<Output = Result<Vec<PlaceHit>, Self::Error>> + Send;
}
