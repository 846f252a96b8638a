//! Core domain types and configuration for mapscout.
//!
//! Holds the place/anchor data model, the Haversine distance function, the
//! category → query-term taxonomy, the [`PlaceSearch`] seam between the
//! aggregation layer and the concrete API client, and env-driven application
//! configuration.

pub mod app_config;
pub mod config;
pub mod geo;
pub mod search;
pub mod taxonomy;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use search::PlaceSearch;
pub use taxonomy::{Category, CategoryTaxonomy};
pub use types::{AnchorLocation, Coordinate, PlaceHit, PlaceRecord};

use thiserror::Error;

/// Errors raised while loading application or taxonomy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read taxonomy file {path}: {source}")]
    TaxonomyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse taxonomy file: {0}")]
    TaxonomyFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
