//! The persisted hotspot report document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use mapscout_core::types::AnchorLocation;

use crate::aggregator::HotspotResultSet;
use crate::error::HotspotError;

/// The JSON document written after a hotspot search.
#[derive(Debug, Serialize)]
pub struct HotspotReport {
    pub restaurant_info: AnchorLocation,
    pub search_radius_km: f64,
    pub search_timestamp: DateTime<Utc>,
    pub total_hotspots: usize,
    pub hotspots_by_category: HotspotResultSet,
    pub summary: BTreeMap<String, usize>,
}

impl HotspotReport {
    /// Assembles a report, computing the total and per-category counts and
    /// stamping the current time.
    #[must_use]
    pub fn new(anchor: AnchorLocation, radius_km: f64, hotspots: HotspotResultSet) -> Self {
        let total_hotspots = hotspots.values().map(Vec::len).sum();
        let summary = hotspots
            .iter()
            .map(|(category, records)| (category.clone(), records.len()))
            .collect();

        Self {
            restaurant_info: anchor,
            search_radius_km: radius_km,
            search_timestamp: Utc::now(),
            total_hotspots,
            hotspots_by_category: hotspots,
            summary,
        }
    }

    /// The file name for this report: sanitized anchor name, radius, and
    /// timestamp.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "hotspots_near_{}_{}km_{}.json",
            sanitize_name(&self.restaurant_info.name),
            self.search_radius_km,
            self.search_timestamp.format("%Y%m%d_%H%M%S"),
        )
    }
}

/// Makes a place name safe for use in a file name: spaces and path
/// separators become underscores.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.replace([' ', '/'], "_")
}

/// Writes the report as pretty-printed JSON into `out_dir`, creating the
/// directory if needed. Returns the path of the written file.
///
/// # Errors
///
/// Returns [`HotspotError::Persistence`] if the directory or file cannot be
/// written, or [`HotspotError::Serialize`] if serialization fails.
pub fn write_report(report: &HotspotReport, out_dir: &Path) -> Result<PathBuf, HotspotError> {
    std::fs::create_dir_all(out_dir).map_err(|e| HotspotError::Persistence {
        path: out_dir.display().to_string(),
        source: e,
    })?;

    let path = out_dir.join(report.file_name());
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json).map_err(|e| HotspotError::Persistence {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(path)
}
