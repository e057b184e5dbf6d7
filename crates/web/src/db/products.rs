//! Product repository for database operations.
//!
//! Store-level validation lives here: the closed category set is checked
//! before any write, and the `price > 0` check constraint is translated
//! into a field-error message rather than surfacing as a raw database
//! failure. Queries are runtime-checked (`query_as`), so the crate builds
//! without a live database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lazzat_core::{Category, ProductId};

use super::RepositoryError;
use crate::models::Product;

/// Raw product row as stored.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    price: f64,
    image: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            price: row.price,
            image: row.image,
            category: row.category,
            created_at: row.created_at,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all products, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all_recent_first(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, image, category, created_at
            FROM products
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Count all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, image, category, created_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Create a new product. The store assigns the ID and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the category is not in the
    /// closed set or the price fails the store constraint.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        price: f64,
        image: &str,
        category: &str,
    ) -> Result<Product, RepositoryError> {
        let category = validate_category(category)?;

        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (name, price, image, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, image, category, created_at
            ",
        )
        .bind(name)
        .bind(price)
        .bind(image)
        .bind(category.slug())
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    /// Overwrite all mutable fields of a product. The creation timestamp is
    /// never touched.
    ///
    /// Returns `None` if no product with the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the category is not in the
    /// closed set or the price fails the store constraint.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        name: &str,
        price: f64,
        image: &str,
        category: &str,
    ) -> Result<Option<Product>, RepositoryError> {
        let category = validate_category(category)?;

        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE products
            SET name = $2, price = $3, image = $4, category = $5
            WHERE id = $1
            RETURNING id, name, price, image, category, created_at
            ",
        )
        .bind(id.as_i32())
        .bind(name)
        .bind(price)
        .bind(image)
        .bind(category.slug())
        .fetch_optional(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.map(Product::from))
    }

    /// Delete a product permanently.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Check a raw label against the closed category set.
fn validate_category(category: &str) -> Result<Category, RepositoryError> {
    Category::parse(category).map_err(|e| RepositoryError::Validation(vec![e.to_string()]))
}

/// Translate check-constraint violations on writes into field errors.
fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_check_violation()
    {
        return RepositoryError::Validation(vec!["price must be greater than zero".to_owned()]);
    }
    RepositoryError::Database(e)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_category_known() {
        assert!(validate_category("burger").is_ok());
        assert!(validate_category("drinks").is_ok());
    }

    #[test]
    fn test_validate_category_unknown_is_validation_error() {
        let err = validate_category("sushi").unwrap_err();
        assert!(matches!(err, RepositoryError::Validation(ref msgs) if msgs.len() == 1));
    }

    #[test]
    fn test_map_write_error_passthrough() {
        let err = map_write_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
