use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use strokeflow_core::keys;
use strokeflow_core::models::visit::{NewVisit, Visit, VisitId};

use crate::error::StorageError;
use crate::store::{BoxFuture, VisitStore};

/// One JSON document per visit under `<root>/visits/{id}.json`.
///
/// Writes go to a temp file and are renamed into place, and are serialised
/// through a single lock so id and code allocation cannot race.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(root.join(keys::VISITS_PREFIX)).await?;
        tracing::info!(root = %root.display(), "file store opened");
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: VisitId) -> PathBuf {
        self.root.join(keys::visit(id))
    }

    async fn read_visit(&self, id: VisitId) -> Result<Visit, StorageError> {
        let bytes = match tokio::fs::read(self.path_for(id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound { id });
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Ids of every stored visit, ascending.
    async fn list_ids(&self) -> Result<Vec<VisitId>, StorageError> {
        let mut ids = Vec::new();
        let mut entries = tokio::fs::read_dir(self.root.join(keys::VISITS_PREFIX)).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let key = format!("{}{}", keys::VISITS_PREFIX, name.to_string_lossy());
            if let Some(id) = keys::visit_id_from_key(&key) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    async fn read_all(&self) -> Result<Vec<Visit>, StorageError> {
        let mut visits = Vec::new();
        for id in self.list_ids().await? {
            visits.push(self.read_visit(id).await?);
        }
        Ok(visits)
    }

    async fn write_visit(&self, visit: &Visit) -> Result<(), StorageError> {
        let path = self.path_for(visit.id);
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(visit)?;

        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        tracing::debug!(visit_id = %visit.id, path = %path.display(), "visit written");
        Ok(())
    }
}

impl VisitStore for FileStore {
    fn get(&self, id: VisitId) -> BoxFuture<'_, Result<Visit, StorageError>> {
        Box::pin(self.read_visit(id))
    }

    fn find_by_code<'a>(
        &'a self,
        code: &'a str,
    ) -> BoxFuture<'a, Result<Option<Visit>, StorageError>> {
        Box::pin(async move {
            Ok(self
                .read_all()
                .await?
                .into_iter()
                .find(|v| v.code == code))
        })
    }

    fn list_for_patient<'a>(
        &'a self,
        patient_code: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Visit>, StorageError>> {
        Box::pin(async move {
            Ok(self
                .read_all()
                .await?
                .into_iter()
                .filter(|v| v.patient_code == patient_code)
                .collect())
        })
    }

    fn insert(&self, visit: NewVisit) -> BoxFuture<'_, Result<Visit, StorageError>> {
        Box::pin(async move {
            let _guard = self.write_lock.lock().await;
            let existing = self.read_all().await?;
            let next = existing.last().map_or(1, |last| last.id.0 + 1);
            let sequence = existing
                .iter()
                .filter(|v| v.patient_code == visit.patient_code)
                .count()
                + 1;
            let code = keys::visit_code(&visit.patient_code, sequence);
            let visit = visit.into_visit(VisitId(next), code);
            self.write_visit(&visit).await?;
            Ok(visit)
        })
    }

    fn put<'a>(&'a self, visit: &'a Visit) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let _guard = self.write_lock.lock().await;
            if !tokio::fs::try_exists(self.path_for(visit.id)).await? {
                return Err(StorageError::NotFound { id: visit.id });
            }
            self.write_visit(visit).await
        })
    }
}
