//! Admin domain type.

use chrono::{DateTime, Utc};

use lazzat_core::{AdminId, Login};

/// An administrator credential record.
///
/// Created out-of-band by `lazzat-cli create-admin`; never updated or
/// deleted through the request surface. The password is stored as-is
/// (legacy plaintext) and only ever compared through
/// [`crate::services::credentials::CredentialVerifier`].
#[derive(Debug, Clone)]
pub struct Admin {
    /// Unique admin ID.
    pub id: AdminId,
    /// Unique login name.
    pub login: Login,
    /// Stored password, plaintext.
    pub password: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Optional surname.
    pub surname: Option<String>,
    /// Optional email, unique if present.
    pub email: Option<String>,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
}
