use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to decode response body: {0}")]
    DecodingError(String),

    #[error("Blocking task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type ReaderResult<T> = Result<T, ReaderError>;
