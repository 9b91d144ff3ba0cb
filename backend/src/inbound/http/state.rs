//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and stay testable without a real store.

use std::sync::Arc;

use crate::domain::ports::{PreferencesCommand, PreferencesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub preferences: Arc<dyn PreferencesCommand>,
    pub preferences_query: Arc<dyn PreferencesQuery>,
}

impl HttpState {
    /// Build state from explicit port implementations.
    pub fn new(
        preferences: Arc<dyn PreferencesCommand>,
        preferences_query: Arc<dyn PreferencesQuery>,
    ) -> Self {
        Self {
            preferences,
            preferences_query,
        }
    }

    /// Build state from one service implementing both driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use preferences_backend::domain::PreferencesService;
    /// use preferences_backend::inbound::http::state::HttpState;
    /// use preferences_backend::outbound::memory::InMemoryPreferenceStore;
    ///
    /// let service = PreferencesService::new(Arc::new(InMemoryPreferenceStore::new()));
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: PreferencesCommand + PreferencesQuery + 'static,
    {
        Self {
            preferences: service.clone(),
            preferences_query: service,
        }
    }
}
