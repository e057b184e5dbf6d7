//! Admin panel page and product CRUD handlers.
//!
//! The page route is gated by [`RequireAdminPage`], the JSON routes by
//! [`RequireAdminApi`]. JSON responses carry a `success` flag plus either
//! the affected product or an error string.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use lazzat_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminApi, RequireAdminPage};
use crate::models::Product;
use crate::state::AppState;

/// Dashboard metrics.
#[derive(Debug, Clone)]
pub struct PanelMetrics {
    /// Total number of products in the store.
    pub total_products: i64,
    /// The ten most recently created products.
    pub recent: Vec<Product>,
}

/// Admin panel template.
#[derive(Template, WebTemplate)]
#[template(path = "admin_panel.html")]
pub struct AdminPanelTemplate {
    pub metrics: PanelMetrics,
    pub products: Vec<Product>,
    pub admin_name: String,
}

/// Display the admin dashboard with metrics and the full product list.
pub async fn panel(
    State(state): State<AppState>,
    RequireAdminPage(admin): RequireAdminPage,
) -> Result<Response> {
    let repo = ProductRepository::new(state.pool());

    let (products, total_products) = tokio::try_join!(repo.all_recent_first(), repo.count())
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to load admin panel data");
            AppError::Internal("Server error".to_string())
        })?;

    let metrics = PanelMetrics {
        total_products,
        recent: products.iter().take(10).cloned().collect(),
    };

    Ok(AdminPanelTemplate {
        metrics,
        products,
        admin_name: admin.login,
    }
    .into_response())
}

/// Product form data for create and update.
///
/// The price arrives as a string and is parsed as a floating-point
/// number, mirroring how the management UI submits it. All fields are
/// optional at the deserialization layer so missing input produces the
/// validation message instead of a body-rejection.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductForm {
    /// All four fields, or the missing-fields validation error.
    fn require_all(self) -> Result<(String, String, String, String)> {
        match (
            non_empty(self.name),
            non_empty(self.price),
            non_empty(self.image),
            non_empty(self.category),
        ) {
            (Some(name), Some(price), Some(image), Some(category)) => {
                Ok((name, price, image, category))
            }
            _ => Err(AppError::Validation(
                "Barcha maydonlarni to'ldiring!".to_string(),
            )),
        }
    }
}

/// Treat empty strings the same as absent fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Unwrap the JSON body, treating an absent or unreadable body the same
/// as missing fields.
fn require_form(
    payload: std::result::Result<Json<ProductForm>, JsonRejection>,
) -> Result<ProductForm> {
    payload.map(|Json(form)| form).map_err(|_| {
        AppError::Validation("Barcha maydonlarni to'ldiring!".to_string())
    })
}

/// Parse a submitted price string as a finite floating-point number.
fn parse_price(price: &str) -> Result<f64> {
    price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| AppError::Validation("Narx maydoniga to'g'ri raqam kiriting!".to_string()))
}

/// Create a product.
///
/// All four fields are required and the price must parse to a strictly
/// positive number; store-level validation failures (unknown category,
/// price constraint) are aggregated into one validation message.
pub async fn create_product(
    State(state): State<AppState>,
    RequireAdminApi(_admin): RequireAdminApi,
    payload: std::result::Result<Json<ProductForm>, JsonRejection>,
) -> Result<Response> {
    let (name, price, image, category) = require_form(payload)?.require_all()?;

    let price = parse_price(&price)?;
    if price <= 0.0 {
        return Err(AppError::Validation(
            "Narx maydoniga to'g'ri raqam kiriting!".to_string(),
        ));
    }

    let repo = ProductRepository::new(state.pool());
    let product = repo
        .create(&name, price, &image, &category)
        .await
        .map_err(|e| AppError::from_repository("Mahsulot qo'shishda xatolik yuz berdi", e))?;

    tracing::info!(product_id = %product.id, "Product created");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Mahsulot muvaffaqiyatli qo'shildi",
            "product": product,
        })),
    )
        .into_response())
}

/// Update a product, overwriting all four fields.
///
/// The price is re-parsed as floating point but not re-checked for
/// positivity here - the store constraint applies.
pub async fn update_product(
    State(state): State<AppState>,
    RequireAdminApi(_admin): RequireAdminApi,
    Path(id): Path<i32>,
    payload: std::result::Result<Json<ProductForm>, JsonRejection>,
) -> Result<Response> {
    let (name, price, image, category) = require_form(payload)?.require_all()?;
    let price = parse_price(&price)?;

    let repo = ProductRepository::new(state.pool());
    let product = repo
        .update(ProductId::new(id), &name, price, &image, &category)
        .await
        .map_err(|e| AppError::from_repository("Mahsulot yangilashda xatolik yuz berdi", e))?
        .ok_or_else(|| AppError::NotFound("Mahsulot topilmadi".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "message": "Mahsulot muvaffaqiyatli yangilandi",
        "product": product,
    }))
    .into_response())
}

/// Delete a product permanently.
///
/// Deletion is idempotent at the identifier level: the first call
/// succeeds, a repeat with the same identifier reports not-found.
pub async fn delete_product(
    State(state): State<AppState>,
    RequireAdminApi(_admin): RequireAdminApi,
    Path(id): Path<i32>,
) -> Result<Response> {
    let repo = ProductRepository::new(state.pool());
    let deleted = repo
        .delete(ProductId::new(id))
        .await
        .map_err(|e| AppError::from_repository("Mahsulot o'chirishda xatolik yuz berdi", e))?;

    if !deleted {
        return Err(AppError::NotFound("Mahsulot topilmadi".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Mahsulot muvaffaqiyatli o'chirildi",
    }))
    .into_response())
}

/// Fetch a product for the edit form.
pub async fn product_detail(
    State(state): State<AppState>,
    RequireAdminApi(_admin): RequireAdminApi,
    Path(id): Path<i32>,
) -> Result<Response> {
    let repo = ProductRepository::new(state.pool());
    let product = repo
        .get(ProductId::new(id))
        .await
        .map_err(|e| AppError::from_repository("Mahsulotni olishda xatolik yuz berdi", e))?
        .ok_or_else(|| AppError::NotFound("Mahsulot topilmadi".to_string()))?;

    Ok(Json(json!({ "success": true, "product": product })).into_response())
}
