//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, UrlValidator};
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Link service wired to the process-local store.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

/// Handles to the services, constructed once at startup.
///
/// Cloning is cheap: every field is reference-counted, so all requests see
/// the same store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub url_validator: Arc<UrlValidator>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, url_validator: Arc<UrlValidator>) -> Self {
        Self {
            link_service,
            url_validator,
        }
    }
}
