//! Session gate for protected routes.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;

use crate::auth::session;

/// Authenticated user identity, inserted into request extensions by
/// [`require_session`] and read by gated handlers.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    /// The session's user id.
    pub user_id: i64,
}

/// Middleware guarding the protected route group.
///
/// Requests without a valid session are redirected to the login page;
/// the downstream handler never runs. Requests with a session continue
/// with [`CurrentUser`] attached.
pub async fn require_session(jar: SignedCookieJar, mut request: Request, next: Next) -> Response {
    match session::current_user_id(&jar) {
        Some(user_id) => {
            request.extensions_mut().insert(CurrentUser { user_id });
            next.run(request).await
        }
        None => {
            tracing::debug!(
                path = %request.uri().path(),
                "unauthenticated request, redirecting to /login"
            );
            Redirect::to("/login").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::handlers::AppState;
    use crate::Database;
    use axum::http::{header, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Extension, Router};
    use tower::ServiceExt;

    async fn current_user_id(Extension(user): Extension<CurrentUser>) -> String {
        user.user_id.to_string()
    }

    async fn gated_router() -> Router {
        let db = Database::open_in_memory().await.unwrap();
        let state =
            AppState::new(db, "test-secret-0123456789abcdef0123456789abcdef").unwrap();
        Router::new()
            .route("/protected", get(current_user_id))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_session,
            ))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_no_session_redirects_to_login() {
        let router = gated_router().await;
        let request = axum::http::Request::builder()
            .uri("/protected")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login"
        );
    }

    #[tokio::test]
    async fn test_garbage_cookie_redirects_to_login() {
        let router = gated_router().await;
        let request = axum::http::Request::builder()
            .uri("/protected")
            .header(header::COOKIE, "portal_session=forged-value")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}
