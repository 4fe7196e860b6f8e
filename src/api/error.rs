use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Wunderlist returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid credential header: {0}")]
    InvalidCredentials(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
