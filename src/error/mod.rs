use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConciergeError>;

#[derive(Error, Debug)]
pub enum ConciergeError {
    #[error("Failed to load reference data: {0}")]
    DataLoadError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<serde_json::Error> for ConciergeError {
    fn from(err: serde_json::Error) -> Self {
        ConciergeError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for ConciergeError {
    fn from(err: std::io::Error) -> Self {
        ConciergeError::InternalError(err.to_string())
    }
}

impl From<anyhow::Error> for ConciergeError {
    fn from(err: anyhow::Error) -> Self {
        ConciergeError::InternalError(err.to_string())
    }
}
