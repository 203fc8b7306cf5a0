//! Short code assignment and retrieval service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Default cap on generation attempts before giving up.
///
/// Only reached once the store holds a large share of the 64^8 possible codes.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Service owning the short code mapping rules.
///
/// User-supplied and generated codes share one key space; uniqueness is
/// enforced by the repository's atomic insert.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    max_attempts: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the generation attempt cap. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Stores a mapping for an already validated URL.
    ///
    /// An empty `requested_code` counts as absent.
    ///
    /// # Code Assignment
    ///
    /// - If `requested_code` is provided, it is used as-is or rejected
    /// - Otherwise, a random 8-character code is generated, retrying on
    ///   collision up to the configured cap
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeTaken`] if the requested code is already mapped.
    ///
    /// Returns [`AppError::CodeSpaceExhausted`] if every generated code collided.
    pub async fn create_short_link(
        &self,
        original_url: String,
        requested_code: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        match requested_code.filter(|code| !code.is_empty()) {
            Some(code) => {
                self.link_repository
                    .insert(UrlRecord::new(code, original_url))
                    .await
            }
            None => self.insert_with_generated_code(original_url).await,
        }
    }

    /// Returns all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Empty`] if the store holds no records.
    pub async fn list_links(&self) -> Result<Vec<UrlRecord>, AppError> {
        let records = self.link_repository.list().await?;

        if records.is_empty() {
            return Err(AppError::Empty);
        }

        Ok(records)
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))
    }

    /// Number of stored records.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }

    async fn insert_with_generated_code(&self, original_url: String) -> Result<UrlRecord, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code().map_err(|e| AppError::internal(e.to_string()))?;

            match self
                .link_repository
                .insert(UrlRecord::new(code, original_url.clone()))
                .await
            {
                Err(AppError::CodeTaken(code)) => {
                    debug!(attempt, code = %code, "Generated code collided, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}
