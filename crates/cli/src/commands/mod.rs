//! CLI command implementations.

pub mod admin;
pub mod migrate;

/// Resolve the database connection string from the environment.
///
/// Checks `LAZZAT_DATABASE_URL` first, then falls back to `DATABASE_URL`.
pub(crate) fn database_url() -> Result<String, MissingDatabaseUrl> {
    std::env::var("LAZZAT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MissingDatabaseUrl)
}

/// Neither `LAZZAT_DATABASE_URL` nor `DATABASE_URL` is set.
#[derive(Debug, thiserror::Error)]
#[error("Missing environment variable: LAZZAT_DATABASE_URL (or DATABASE_URL)")]
pub(crate) struct MissingDatabaseUrl;
