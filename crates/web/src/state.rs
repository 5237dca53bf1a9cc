use std::{future::Future, sync::Arc, time::Duration};

use storage::{ScheduleStore, StorageError, error::Result};

/// Shared handler context: the store handle and the per-query time budget.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ScheduleStore>,
    query_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn ScheduleStore>, query_timeout: Duration) -> Self {
        Self {
            store,
            query_timeout,
        }
    }

    pub fn store(&self) -> &dyn ScheduleStore {
        self.store.as_ref()
    }

    /// Runs one store call, giving up with [`StorageError::Timeout`] once
    /// the query budget is spent.
    pub async fn bounded<T, F>(&self, query: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.query_timeout, query)
            .await
            .map_err(|_| StorageError::Timeout)?
    }
}
