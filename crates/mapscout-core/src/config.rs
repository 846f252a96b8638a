use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let serpapi_api_key = require("SERPAPI_API_KEY")?;

    let request_timeout_secs = parse_u64("MAPSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let inter_query_delay_ms = parse_u64("MAPSCOUT_INTER_QUERY_DELAY_MS", "500")?;
    let output_dir = PathBuf::from(or_default("MAPSCOUT_OUTPUT_DIR", "./hotspot_data"));
    let taxonomy_path = lookup("MAPSCOUT_TAXONOMY_PATH").ok().map(PathBuf::from);
    let log_level = or_default("MAPSCOUT_LOG_LEVEL", "info");
    let reviews_language = or_default("MAPSCOUT_REVIEWS_LANGUAGE", "en");

    Ok(AppConfig {
        serpapi_api_key,
        request_timeout_secs,
        inter_query_delay_ms,
        output_dir,
        taxonomy_path,
        log_level,
        reviews_language,
    })
}
