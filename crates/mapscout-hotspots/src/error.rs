use thiserror::Error;

/// Errors raised while persisting hotspot results.
///
/// A persistence failure never invalidates the in-memory result set; callers
/// report it and keep what they already computed.
#[derive(Debug, Error)]
pub enum HotspotError {
    #[error("failed to write report to {path}: {source}")]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
