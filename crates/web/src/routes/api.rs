//! Public JSON API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use tower_sessions::Session;

use lazzat_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::{OptionalAdmin, clear_current_admin};
use crate::models::Product;
use crate::state::AppState;

/// List all products as a flat JSON array, most recent first.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.pool());
    let products = repo
        .all_recent_first()
        .await
        .map_err(|e| AppError::from_repository("Failed to fetch products", e))?;

    Ok(Json(products))
}

/// Fetch one product as raw JSON, or `null` when the identifier does not
/// resolve.
///
/// Unlike the admin detail fetch this has no success/error envelope;
/// existing detail-view scripts consume the bare record.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Product>>> {
    let repo = ProductRepository::new(state.pool());
    let product = repo
        .get(ProductId::new(id))
        .await
        .map_err(|e| AppError::from_repository("Failed to fetch product", e))?;

    Ok(Json(product))
}

/// Report whether the current caller holds an admin session.
pub async fn check_admin(OptionalAdmin(admin): OptionalAdmin) -> Json<serde_json::Value> {
    Json(json!({ "isAdmin": admin.is_some() }))
}

/// Force-clear the admin session fields (used by the storefront for a
/// clean state on page load). Always reports success; session-store
/// errors are logged and swallowed.
pub async fn clear_session(session: Session) -> Json<serde_json::Value> {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!(error = %e, "Failed to clear session fields");
    }

    Json(json!({ "success": true }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::{get, post},
    };
    use lazzat_core::AdminId;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use crate::middleware::{RequireAdminApi, set_current_admin};
    use crate::models::CurrentAdmin;

    async fn login_handler(session: Session) -> &'static str {
        let admin = CurrentAdmin {
            id: AdminId::new(1),
            login: "asila".to_string(),
        };
        set_current_admin(&session, &admin).await.unwrap();
        "ok"
    }

    async fn gated_handler(RequireAdminApi(admin): RequireAdminApi) -> String {
        admin.login
    }

    fn test_router() -> Router {
        Router::new()
            .route("/login", get(login_handler))
            .route("/gated", get(gated_handler))
            .route("/check-admin", get(check_admin))
            .route("/clear-session", post(clear_session))
            .layer(SessionManagerLayer::new(MemoryStore::default()))
    }

    async fn authenticate(router: &Router) -> String {
        let response = router
            .clone()
            .oneshot(Request::get("/login").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_clear_session_always_reports_success() {
        // Anonymous caller with no session at all.
        let response = test_router()
            .oneshot(Request::post("/clear-session").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_clear_session_revokes_admin_access() {
        let router = test_router();
        let cookie = authenticate(&router).await;

        let response = router
            .clone()
            .oneshot(
                Request::post("/clear-session")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({ "success": true }));

        let response = router
            .oneshot(
                Request::get("/gated")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_check_admin_reflects_session_state() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(Request::get("/check-admin").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({ "isAdmin": false }));

        let cookie = authenticate(&router).await;
        let response = router
            .oneshot(
                Request::get("/check-admin")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({ "isAdmin": true }));
    }
}
