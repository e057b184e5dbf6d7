//! Authentication extractors for admin-gated routes.
//!
//! The auth gate is a read-only inspection of session state. Whether a
//! denial redirects to the login page or answers with a structured 401 is
//! decided by which extractor a route registers - page routes take
//! [`RequireAdminPage`], JSON routes take [`RequireAdminApi`] - rather
//! than by sniffing request headers at runtime.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{CurrentAdmin, session_keys};

/// Extractor that requires an authenticated admin on a page route.
///
/// If no admin is logged in, the request is answered with a redirect to
/// the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn admin_panel(
///     RequireAdminPage(admin): RequireAdminPage,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.login)
/// }
/// ```
pub struct RequireAdminPage(pub CurrentAdmin);

/// Rejection for [`RequireAdminPage`]: send the browser to the login form.
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        Redirect::to("/admin-login").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdminPage
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_admin(parts).await.map_or(Err(RedirectToLogin), |admin| Ok(Self(admin)))
    }
}

/// Extractor that requires an authenticated admin on a JSON route.
///
/// If no admin is logged in, the request is answered with
/// `401 {"error": "Unauthorized"}`.
pub struct RequireAdminApi(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireAdminApi
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_admin(parts)
            .await
            .map_or(Err(AppError::Unauthorized), |admin| Ok(Self(admin)))
    }
}

/// Extractor that optionally gets the current admin.
///
/// Unlike the gated extractors, this never rejects. It feeds the
/// storefront's `is_admin` flag.
pub struct OptionalAdmin(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdmin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_admin(parts).await))
    }
}

/// Read the current admin out of the session, if any.
async fn current_admin(parts: &Parts) -> Option<CurrentAdmin> {
    // The session is placed in extensions by SessionManagerLayer
    let session = parts.extensions.get::<Session>()?;
    session
        .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
}

/// Helper to set the current admin in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use lazzat_core::AdminId;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    async fn page_handler(RequireAdminPage(admin): RequireAdminPage) -> String {
        admin.login
    }

    async fn api_handler(RequireAdminApi(admin): RequireAdminApi) -> String {
        admin.login
    }

    async fn optional_handler(OptionalAdmin(admin): OptionalAdmin) -> String {
        admin.map_or_else(|| "anonymous".to_string(), |a| a.login)
    }

    async fn login_handler(session: Session) -> &'static str {
        let admin = CurrentAdmin {
            id: AdminId::new(1),
            login: "asila".to_string(),
        };
        set_current_admin(&session, &admin).await.unwrap();
        "ok"
    }

    async fn logout_handler(session: Session) -> &'static str {
        clear_current_admin(&session).await.unwrap();
        "ok"
    }

    fn test_router() -> Router {
        Router::new()
            .route("/panel", get(page_handler))
            .route("/api", get(api_handler))
            .route("/optional", get(optional_handler))
            .route("/login", get(login_handler))
            .route("/logout", get(logout_handler))
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

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_page_request_redirects_to_login() {
        let response = test_router()
            .oneshot(Request::get("/panel").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/admin-login"
        );
    }

    #[tokio::test]
    async fn test_anonymous_api_request_gets_401_json() {
        let response = test_router()
            .oneshot(Request::get("/api").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_string(response).await;
        assert_eq!(body, r#"{"error":"Unauthorized"}"#);
    }

    #[tokio::test]
    async fn test_authenticated_request_passes_gate() {
        let router = test_router();
        let cookie = authenticate(&router).await;

        let response = router
            .clone()
            .oneshot(
                Request::get("/panel")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "asila");

        let response = router
            .oneshot(
                Request::get("/api")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_optional_admin_never_rejects() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(Request::get("/optional").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "anonymous");

        let cookie = authenticate(&router).await;
        let response = router
            .oneshot(
                Request::get("/optional")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "asila");
    }

    #[tokio::test]
    async fn test_clearing_session_returns_gate_to_anonymous() {
        let router = test_router();
        let cookie = authenticate(&router).await;

        let response = router
            .clone()
            .oneshot(
                Request::get("/logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::get("/panel")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}
