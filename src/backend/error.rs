use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend base URL cannot have path segments: {0}")]
    InvalidBaseUrl(String),

    #[error("Backend unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),
}
