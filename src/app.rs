//! App Core for Tagmarks.
//!
//! Wires configuration to the HTTP client and shares one backend between
//! the CRUD store and the search session.

use std::sync::Arc;

use crate::client::bookmark_api::BookmarkApi;
use crate::client::bookmark_store::BookmarkStore;
use crate::client::rest_client::RestClient;
use crate::config::ClientConfig;
use crate::search::session::SearchSession;
use crate::types::errors::ApiError;

/// Central struct holding the configured client components.
pub struct App {
    pub config: ClientConfig,
    pub store: BookmarkStore,
    pub session: SearchSession,
}

impl App {
    /// Builds the client stack from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let rest = RestClient::new(&config.backend.base_url, config.timeout())?;
        let backend = Arc::new(BookmarkApi::new(rest));

        let store = BookmarkStore::with_stale_after(backend.clone(), config.stale_after());
        let session = SearchSession::with_debounce(backend, config.debounce());

        Ok(Self {
            config,
            store,
            session,
        })
    }
}
