#[derive(Debug, thiserror::Error)]
pub enum GoCollectError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request construction error: {0}")]
    RequestConstruction(String),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed with status code: {status}")]
    Api { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Empty response: status {status} carried no record")]
    EmptyResponse { status: u16 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[cfg(feature = "async")]
    #[error("Task error: {0}")]
    Task(String),
}

impl GoCollectError {
    /// HTTP status of an [`Api`](Self::Api) error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body captured for an [`Api`](Self::Api) error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True when the server rejected the call with `429 Too Many Requests`.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// True when the server answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, GoCollectError>;
