#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url_library::api::handlers::health_handler;
use url_library::api::routes::shortener_routes;
use url_library::application::services::{LinkService, UrlValidator};
use url_library::domain::repositories::{ProbeError, ReachabilityProbe};
use url_library::infrastructure::persistence::InMemoryLinkRepository;
use url_library::state::AppState;

/// Probe that answers from a fixed table instead of the network.
///
/// Unknown URLs fail like a DNS error.
#[derive(Default)]
pub struct StubProbe {
    responses: HashMap<String, u16>,
    calls: AtomicUsize,
}

impl StubProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), status);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReachabilityProbe for StubProbe {
    async fn fetch_status(&self, url: &str) -> Result<u16, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(url)
            .copied()
            .ok_or_else(|| ProbeError::Transport(format!("dns error for {url}")))
    }
}

/// Probe knowing the sites used throughout the handler tests.
pub fn default_probe() -> StubProbe {
    StubProbe::new()
        .with_status("https://www.example.com", 200)
        .with_status("https://www.target.com", 200)
        .with_status("https://www.artwod.com", 301)
        .with_status("https://artwod.com", 200)
        .with_status("https://gone.example.com", 404)
        .with_status("https://broken.example.com", 500)
        .with_status("https://switching.example.com", 101)
}

pub fn create_test_state(probe: Arc<StubProbe>) -> AppState {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository));
    let url_validator = Arc::new(UrlValidator::new(probe));

    AppState::new(link_service, url_validator)
}

/// State backed by the sites known to [`default_probe`].
pub fn default_state() -> AppState {
    create_test_state(Arc::new(default_probe()))
}

/// Router with every endpoint, without the path-normalizing wrapper.
pub fn create_test_app(state: AppState) -> Router {
    shortener_routes()
        .route("/health", get(health_handler))
        .with_state(state)
}
