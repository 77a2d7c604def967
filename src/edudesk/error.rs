use crate::model::ContentKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdudeskError {
    #[error("Content record not found: {0}")]
    RecordNotFound(ContentKey),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Derivation error: {0}")]
    Derive(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, EdudeskError>;
