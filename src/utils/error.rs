use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network Error: {0}")]
    NetworkError(String),

    #[error("Api Error: {0}")]
    ApiError(String),

    #[error("Decode Error: {0}")]
    DecodeError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),
}
