//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::WebConfig;
use crate::services::{CredentialVerifier, LegacyPlaintextVerifier};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    pool: PgPool,
    verifier: Box<dyn CredentialVerifier>,
}

impl AppState {
    /// Create a new application state with the legacy plaintext
    /// credential verifier.
    #[must_use]
    pub fn new(config: WebConfig, pool: PgPool) -> Self {
        Self::with_verifier(config, pool, Box::new(LegacyPlaintextVerifier))
    }

    /// Create a new application state with an explicit credential
    /// verification strategy.
    #[must_use]
    pub fn with_verifier(
        config: WebConfig,
        pool: PgPool,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                verifier,
            }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the credential verification strategy.
    #[must_use]
    pub fn verifier(&self) -> &dyn CredentialVerifier {
        self.inner.verifier.as_ref()
    }
}
