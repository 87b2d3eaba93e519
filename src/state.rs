//! Application state for the Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::settings::{ApplicationConfig, Settings};
use crate::db::Store;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Designed for Axum's State extractor. Cloning is cheap since both the
/// services and the store handle are reference counted internally. No mutable
/// state is shared across requests; each request builds its own output.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the store, used by health checks
    pub store: Store,
    /// Application name and version, used by the status endpoints
    pub application: ApplicationConfig,
}

impl AppState {
    /// Creates a new AppState from a connected store and settings.
    ///
    /// Initializes all repositories and services from the provided store.
    pub fn new(store: Store, settings: &Settings) -> Self {
        let repos = Repositories::new(store.clone());
        let services = Services::new(repos, settings.store.max_concurrent_lookups);
        Self {
            services,
            store,
            application: settings.application.clone(),
        }
    }
}
