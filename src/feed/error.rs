use thiserror::Error;

/// Errors that can occur while fetching the item listing.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("'{endpoint}' answered with status {status}")]
    Status { endpoint: String, status: u16 },

    /// The body was not a sequence of items.
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
