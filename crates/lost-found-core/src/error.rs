//! Domain Errors
//!
//! Every failure the controller or the data service can report.

use thiserror::Error;

use crate::item::ItemId;

/// Common result type for domain operations
pub type LostFoundResult<T> = Result<T, LostFoundError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LostFoundError {
    #[error("item {0} not found")]
    NotFound(ItemId),
    #[error("no image selected")]
    NoFileSelected,
    #[error("an upload is already being analyzed")]
    UploadInProgress,
    #[error("upload ticket {0} is not the pending upload")]
    StaleUpload(u64),
    #[error("no free item id left")]
    IdsExhausted,
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LostFoundError {
    fn from(err: serde_json::Error) -> Self {
        LostFoundError::Config(err.to_string())
    }
}
