use std::future::Future;
use std::pin::Pin;

use strokeflow_core::models::visit::{NewVisit, Visit, VisitId};

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Create/read/update access to visit records, by primary key and by
/// patient foreign key.
///
/// Implementations serialise their own writes but offer no cross-call
/// transactions: callers assume one active workflow per visit.
pub trait VisitStore: Send + Sync {
    /// Fetch a visit. `StorageError::NotFound` if it does not exist.
    fn get(&self, id: VisitId) -> BoxFuture<'_, Result<Visit, StorageError>>;

    /// Look a visit up by its per-patient code (e.g. `P003-V001`).
    fn find_by_code<'a>(
        &'a self,
        code: &'a str,
    ) -> BoxFuture<'a, Result<Option<Visit>, StorageError>>;

    /// All visits for a patient, ordered by id.
    fn list_for_patient<'a>(
        &'a self,
        patient_code: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Visit>, StorageError>>;

    /// Persist a new visit and return it with its assigned id and its
    /// per-patient code (`<patient>-V###`, next in sequence). Allocation is
    /// atomic with the write.
    fn insert(&self, visit: NewVisit) -> BoxFuture<'_, Result<Visit, StorageError>>;

    /// Overwrite an existing visit. `StorageError::NotFound` if it does not exist.
    fn put<'a>(&'a self, visit: &'a Visit) -> BoxFuture<'a, Result<(), StorageError>>;
}
