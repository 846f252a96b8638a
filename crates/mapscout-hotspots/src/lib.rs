//! Hotspot aggregation and report persistence.
//!
//! [`HotspotAggregator`] fans out searches across a category → query-term
//! taxonomy through any [`mapscout_core::PlaceSearch`] client, re-filters
//! hits by true great-circle distance, deduplicates by (name, address), and
//! sorts each category by distance. [`report`] turns the result into the
//! persisted JSON document.

pub mod aggregator;
pub mod error;
pub mod report;

pub use aggregator::{HotspotAggregator, HotspotResultSet};
pub use error::HotspotError;
pub use report::{write_report, HotspotReport};
