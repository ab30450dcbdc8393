use thiserror::Error;

/// Error envelope returned by the tracker on a non-200 response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{status}] {code}: {message}")]
pub struct ArcApiError {
    pub status: u16,
    pub code: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("ArcTracker API error {0}")]
    Api(#[from] ArcApiError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("Stash page task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
