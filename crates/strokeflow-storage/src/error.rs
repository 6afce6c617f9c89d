use thiserror::Error;

use strokeflow_core::models::visit::VisitId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("visit not found: {id}")]
    NotFound { id: VisitId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
