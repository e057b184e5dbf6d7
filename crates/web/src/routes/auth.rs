//! Admin login and logout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use lazzat_core::Login;

use crate::db::AdminRepository;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login form data.
///
/// Both fields are optional at the deserialization layer so a missing
/// field reports the validation message instead of a body-rejection.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin_login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handle login form submission.
///
/// Missing input is a validation failure with its own message; an unknown
/// login and a wrong password both render the identical generic message so
/// the response never reveals which field was wrong. The session is only
/// touched on success.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let (Some(login), Some(password)) = (non_empty(form.login), non_empty(form.password)) else {
        return LoginTemplate {
            error: Some("Login va Parol kiriting!".to_string()),
        }
        .into_response();
    };

    // The store trims logins; an all-whitespace login counts as missing.
    let Ok(login) = Login::parse(&login) else {
        return LoginTemplate {
            error: Some("Login va Parol kiriting!".to_string()),
        }
        .into_response();
    };

    let repo = AdminRepository::new(state.pool());
    let admin = match repo.get_by_login(&login).await {
        Ok(admin) => admin,
        Err(e) => {
            tracing::error!(error = %e, "Admin lookup failed during login");
            return LoginTemplate {
                error: Some("Xatolik yuz berdi".to_string()),
            }
            .into_response();
        }
    };

    let verified = admin
        .as_ref()
        .is_some_and(|a| state.verifier().verify(&a.password, &password));

    let Some(admin) = admin.filter(|_| verified) else {
        // Same message for unknown login and wrong password.
        return LoginTemplate {
            error: Some("Noto'g'ri login yoki parol!".to_string()),
        }
        .into_response();
    };

    let current = CurrentAdmin {
        id: admin.id,
        login: admin.login.into_inner(),
    };

    if let Err(e) = set_current_admin(&session, &current).await {
        tracing::error!(error = %e, "Failed to set session after login");
        return LoginTemplate {
            error: Some("Xatolik yuz berdi".to_string()),
        }
        .into_response();
    }

    tracing::info!(admin_id = %current.id, "Admin logged in");
    Redirect::to("/admin-panel").into_response()
}

/// Handle logout.
///
/// Clears the admin from the session and destroys the session entirely.
/// Session-store errors are logged and swallowed - logout always succeeds
/// from the caller's perspective.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!(error = %e, "Failed to clear session");
    }

    if let Err(e) = session.flush().await {
        tracing::error!(error = %e, "Failed to destroy session");
    }

    Redirect::to("/").into_response()
}

/// Treat empty strings the same as absent fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
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

    use crate::middleware::RequireAdminPage;

    #[test]
    fn test_non_empty_filters_blank_values() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("asila".to_string())), Some("asila".to_string()));
    }

    async fn login_handler(session: Session) -> &'static str {
        let admin = CurrentAdmin {
            id: AdminId::new(1),
            login: "asila".to_string(),
        };
        set_current_admin(&session, &admin).await.unwrap();
        "ok"
    }

    async fn panel_handler(RequireAdminPage(admin): RequireAdminPage) -> String {
        admin.login
    }

    fn test_router() -> Router {
        Router::new()
            .route("/login", get(login_handler))
            .route("/admin-logout", get(logout))
            .route("/panel", get(panel_handler))
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

    #[tokio::test]
    async fn test_logout_redirects_home_and_destroys_session() {
        let router = test_router();
        let cookie = authenticate(&router).await;

        let response = router
            .clone()
            .oneshot(
                Request::get("/admin-logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

        // The old cookie no longer opens the gate.
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
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/admin-login"
        );
    }

    #[tokio::test]
    async fn test_logout_without_session_still_redirects_home() {
        let response = test_router()
            .oneshot(Request::get("/admin-logout").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }
}
