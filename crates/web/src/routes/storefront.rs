//! Storefront route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::catalog::{self, CategoryBucket};
use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::OptionalAdmin;
use crate::models::Product;
use crate::state::AppState;

/// Storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// The ten fixed category buckets, in display order.
    pub categories: Vec<CategoryBucket>,
    /// Flat product list, most recent first (includes products whose
    /// category fell outside the buckets).
    pub products: Vec<Product>,
    /// Whether the current caller holds an admin session; reveals the
    /// management controls in the markup.
    pub is_admin: bool,
}

/// Display the storefront with categorized products.
///
/// Public: no auth required. The admin flag comes from the optional
/// session inspection only.
pub async fn home(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
) -> Result<Response> {
    let repo = ProductRepository::new(state.pool());

    let products = repo.all_recent_first().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load products for storefront");
        AppError::Internal("Error loading products".to_string())
    })?;

    let categories = catalog::categorize(&products);

    Ok(IndexTemplate {
        categories,
        products,
        is_admin: admin.is_some(),
    }
    .into_response())
}
