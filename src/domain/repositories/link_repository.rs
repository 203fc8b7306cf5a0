//! Repository trait for short code mappings.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing short code mappings.
///
/// Records are insert-only: there is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a record if its short code is free.
    ///
    /// The existence check and the insert must be atomic with respect to
    /// other calls, so two concurrent inserts of the same code never both
    /// succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeTaken`] if the short code is already mapped.
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns every stored record in no particular order.
    async fn list(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Counts stored records.
    async fn count(&self) -> Result<usize, AppError>;
}
