//! Process-local implementation of [`LinkRepository`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-memory store of short code mappings.
///
/// Inserts hold the write lock across the existence check and the insert, so
/// the uniqueness of short codes holds under concurrent requests. Lookups and
/// listings share the read lock.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    records: RwLock<HashMap<String, UrlRecord>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;

        match records.entry(record.short_code.clone()) {
            Entry::Occupied(entry) => Err(AppError::CodeTaken(entry.key().clone())),
            Entry::Vacant(entry) => {
                info!(short_code = %record.short_code, "Stored new mapping");
                Ok(entry.insert(record).clone())
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.records.read().await.get(code).cloned())
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, AppError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.records.read().await.len())
    }
}
