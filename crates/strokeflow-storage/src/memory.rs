use std::collections::BTreeMap;

use tokio::sync::Mutex;

use strokeflow_core::keys;
use strokeflow_core::models::visit::{NewVisit, Visit, VisitId};

use crate::error::StorageError;
use crate::store::{BoxFuture, VisitStore};

/// Process-local store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    visits: Mutex<BTreeMap<VisitId, Visit>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisitStore for MemoryStore {
    fn get(&self, id: VisitId) -> BoxFuture<'_, Result<Visit, StorageError>> {
        Box::pin(async move {
            self.visits
                .lock()
                .await
                .get(&id)
                .cloned()
                .ok_or(StorageError::NotFound { id })
        })
    }

    fn find_by_code<'a>(
        &'a self,
        code: &'a str,
    ) -> BoxFuture<'a, Result<Option<Visit>, StorageError>> {
        Box::pin(async move {
            Ok(self
                .visits
                .lock()
                .await
                .values()
                .find(|v| v.code == code)
                .cloned())
        })
    }

    fn list_for_patient<'a>(
        &'a self,
        patient_code: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Visit>, StorageError>> {
        Box::pin(async move {
            Ok(self
                .visits
                .lock()
                .await
                .values()
                .filter(|v| v.patient_code == patient_code)
                .cloned()
                .collect())
        })
    }

    fn insert(&self, visit: NewVisit) -> BoxFuture<'_, Result<Visit, StorageError>> {
        Box::pin(async move {
            let mut visits = self.visits.lock().await;
            let id = VisitId(visits.keys().next_back().map_or(1, |last| last.0 + 1));
            let sequence = visits
                .values()
                .filter(|v| v.patient_code == visit.patient_code)
                .count()
                + 1;
            let code = keys::visit_code(&visit.patient_code, sequence);
            let visit = visit.into_visit(id, code);
            visits.insert(id, visit.clone());
            tracing::debug!(visit_id = %id, code = %visit.code, "visit inserted");
            Ok(visit)
        })
    }

    fn put<'a>(&'a self, visit: &'a Visit) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let mut visits = self.visits.lock().await;
            match visits.get_mut(&visit.id) {
                Some(slot) => {
                    *slot = visit.clone();
                    Ok(())
                }
                None => Err(StorageError::NotFound { id: visit.id }),
            }
        })
    }
}
