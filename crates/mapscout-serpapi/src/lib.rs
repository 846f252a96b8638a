//! HTTP client for the SerpApi Google Maps engines.
//!
//! Wraps `reqwest` with SerpApi-specific error handling, API key management,
//! and typed response deserialization. Three engines are used: `google_maps`
//! (place search and place-id resolution) and `google_maps_reviews`
//! (data-id resolution and review retrieval).

pub mod client;
pub mod error;
pub mod types;

pub use client::{IdKind, SerpApiClient};
pub use error::SerpApiError;
pub use types::{PlaceInfo, Review, ReviewsData};
