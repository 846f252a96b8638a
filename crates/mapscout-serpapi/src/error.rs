use thiserror::Error;

/// Errors returned by the SerpApi client.
#[derive(Debug, Error)]
pub enum SerpApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// SerpApi returned a top-level `"error"` message.
    #[error("SerpApi error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API responded but carried no usable place or review data.
    #[error("not found: {0}")]
    NotFound(String),
}
