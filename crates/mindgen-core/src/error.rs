use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown classifier label: {0}")]
    UnknownLabel(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
