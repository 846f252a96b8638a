use std::path::PathBuf;

/// Application configuration, loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    pub serpapi_api_key: String,
    pub request_timeout_secs: u64,
    pub inter_query_delay_ms: u64,
    pub output_dir: PathBuf,
    pub taxonomy_path: Option<PathBuf>,
    pub log_level: String,
    pub reviews_language: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("serpapi_api_key", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("inter_query_delay_ms", &self.inter_query_delay_ms)
            .field("output_dir", &self.output_dir)
            .field("taxonomy_path", &self.taxonomy_path)
            .field("log_level", &self.log_level)
            .field("reviews_language", &self.reviews_language)
            .finish()
    }
}
