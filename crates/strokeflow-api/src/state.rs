use std::sync::Arc;

use strokeflow_storage::fs::FileStore;
use strokeflow_storage::memory::MemoryStore;
use strokeflow_storage::store::VisitStore;

use crate::config::ServiceConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VisitStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn VisitStore>) -> Self {
        Self { store }
    }

    pub async fn from_config(config: &ServiceConfig) -> eyre::Result<Self> {
        let store: Arc<dyn VisitStore> = match &config.data_dir {
            Some(dir) => Arc::new(FileStore::open(dir.clone()).await?),
            None => {
                tracing::warn!("STROKEFLOW_DATA_DIR not set, visits are kept in memory");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::new(store))
    }
}
