//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Storefront with categorized products
//! GET  /health                  - Liveness check (in main.rs)
//!
//! # Admin pages
//! GET  /admin-login             - Login form
//! POST /admin-login             - Login action
//! GET  /admin-panel             - Dashboard (page-gated)
//! GET  /admin-logout            - Logout action
//!
//! # Admin product API (JSON, api-gated)
//! POST   /admin/products        - Create product
//! GET    /admin/products/{id}   - Product detail (edit form prefill)
//! PUT    /admin/products/{id}   - Update product
//! DELETE /admin/products/{id}   - Delete product
//!
//! # Public API
//! GET  /api/products            - Flat product list
//! GET  /api/products/{id}       - Raw product or null
//! GET  /api/check-admin         - {"isAdmin": bool}
//! POST /api/clear-session       - Clear admin session fields
//! ```

pub mod admin;
pub mod api;
pub mod auth;
pub mod storefront;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin page and login routes router.
pub fn admin_page_routes() -> Router<AppState> {
    Router::new()
        .route("/admin-login", get(auth::login_page).post(auth::login))
        .route("/admin-panel", get(admin::panel))
        .route("/admin-logout", get(auth::logout))
}

/// Create the admin product API router.
pub fn admin_product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(admin::create_product))
        .route(
            "/{id}",
            get(admin::product_detail)
                .put(admin::update_product)
                .delete(admin::delete_product),
        )
}

/// Create the public API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::list_products))
        .route("/products/{id}", get(api::get_product))
        .route("/check-admin", get(api::check_admin))
        .route("/clear-session", post(api::clear_session))
}

/// Create all routes for the web server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Storefront
        .route("/", get(storefront::home))
        // Admin pages
        .merge(admin_page_routes())
        // Admin product API
        .nest("/admin/products", admin_product_routes())
        // Public API
        .nest("/api", api_routes())
}
