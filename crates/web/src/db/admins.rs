//! Admin repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lazzat_core::{AdminId, Login};

use super::RepositoryError;
use crate::models::Admin;

/// Raw admin row as stored.
#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i32,
    login: String,
    password: String,
    name: Option<String>,
    surname: Option<String>,
    email: Option<String>,
    created_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_admin(self) -> Result<Admin, RepositoryError> {
        let login = Login::parse(&self.login).map_err(|e| {
            RepositoryError::Validation(vec![format!("invalid login in database: {e}")])
        })?;

        Ok(Admin {
            id: AdminId::new(self.id),
            login,
            password: self.password,
            name: self.name,
            surname: self.surname,
            email: self.email,
            created_at: self.created_at,
        })
    }
}

/// Repository for admin database operations.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an admin by login name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_login(&self, login: &Login) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            SELECT id, login, password, name, surname, email, created_at
            FROM admins
            WHERE login = $1
            ",
        )
        .bind(login.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    /// Create a new admin record (provisioning step, not part of request
    /// handling).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the login (or email, when
    /// present) already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        login: &Login,
        password: &str,
        name: Option<&str>,
        surname: Option<&str>,
        email: Option<&str>,
    ) -> Result<Admin, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            INSERT INTO admins (login, password, name, surname, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, login, password, name, surname, email, created_at
            ",
        )
        .bind(login.as_str())
        .bind(password)
        .bind(name)
        .bind(surname)
        .bind(email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("login already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.into_admin()
    }
}
