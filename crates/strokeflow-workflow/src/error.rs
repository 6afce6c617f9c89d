use thiserror::Error;

use strokeflow_core::error::CoreError;
use strokeflow_core::models::visit::VisitId;
use strokeflow_nihss::error::NihssError;
use strokeflow_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("visit not found: {0}")]
    NotFound(VisitId),

    #[error("visit {0} is finalized")]
    Finalized(VisitId),

    #[error(transparent)]
    Nihss(#[from] NihssError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for WorkflowError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { id } => WorkflowError::NotFound(id),
            other => WorkflowError::Storage(other),
        }
    }
}
