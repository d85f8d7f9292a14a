//! Router configuration for the portal.

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{
    dashboard, icons, login, login_form, notifications, register_form, register_project,
    signup, signup_form, site_map, tables, upgrade, user_profile, AppState,
};
use super::middleware::require_session;

/// Create the portal router.
///
/// `/dashboard` and `/register` sit behind the session gate; everything
/// else is public. `assets_path` is the directory served under /assets.
pub fn create_router(state: AppState, assets_path: &str) -> Router {
    let gated = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/register", get(register_form).post(register_project))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/signup", get(signup_form).post(signup))
        .route("/login", get(login_form).post(login))
        .merge(gated)
        .route("/icons", get(icons))
        .route("/map", get(site_map))
        .route("/notifications", get(notifications))
        .route("/tables", get(tables))
        .route("/upgrade", get(upgrade))
        .route("/user-profile", get(user_profile))
        .nest_service("/assets", ServeDir::new(assets_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    #[tokio::test]
    async fn test_create_router() {
        let db = Database::open_in_memory().await.unwrap();
        let state =
            AppState::new(db, "test-secret-0123456789abcdef0123456789abcdef").unwrap();
        let _router = create_router(state, "assets");
        // Should not panic
    }
}
