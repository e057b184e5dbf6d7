//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a new admin account
//! lazzat-cli admin create -l asila -p asila123
//! ```
//!
//! # Environment Variables
//!
//! - `LAZZAT_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;

use lazzat_core::{Login, LoginError};
use lazzat_web::db::{AdminRepository, RepositoryError};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Database connection string is not configured.
    #[error(transparent)]
    MissingEnvVar(#[from] super::MissingDatabaseUrl),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository-level failure.
    #[error(transparent)]
    Repository(RepositoryError),

    /// Invalid login.
    #[error("Invalid login: {0}")]
    InvalidLogin(#[from] LoginError),

    /// Empty password.
    #[error("Password must not be empty")]
    EmptyPassword,

    /// Account already exists.
    #[error("Admin already exists with login: {0}")]
    AlreadyExists(Login),
}

/// Translate a provisioning-insert failure, folding the uniqueness
/// conflict into the already-exists error the exists-check also reports.
fn map_create_error(login: &Login, err: RepositoryError) -> AdminError {
    match err {
        RepositoryError::Conflict(_) => AdminError::AlreadyExists(login.clone()),
        other => AdminError::Repository(other),
    }
}

/// Create a new admin account.
///
/// Refuses to overwrite an existing account with the same login, so the
/// command is safe to run from provisioning scripts. The check-then-insert
/// race is closed by the store's unique constraint, which reports the same
/// already-exists error.
pub async fn create(login: &str, password: &str) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    let login = Login::parse(login)?;
    let password = SecretString::from(password);
    if password.expose_secret().is_empty() {
        return Err(AdminError::EmptyPassword);
    }

    let database_url = super::database_url()?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;
    let repo = AdminRepository::new(&pool);

    tracing::info!("Creating admin account: {login}");

    let existing = repo
        .get_by_login(&login)
        .await
        .map_err(AdminError::Repository)?;
    if existing.is_some() {
        return Err(AdminError::AlreadyExists(login));
    }

    let admin = repo
        .create(&login, password.expose_secret(), None, None, None)
        .await
        .map_err(|e| map_create_error(&login, e))?;

    tracing::info!("Admin created successfully! ID: {}, Login: {login}", admin.id);

    Ok(admin.id.as_i32())
}
