#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("failed to fetch model from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: gloo::net::Error,
    },
    #[error("model request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to parse model JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("canvas has no 2d context")]
    NoContext,
}
