//! Request handlers for the portal.

pub mod auth;
pub mod pages;
pub mod project;

pub use auth::*;
pub use pages::*;
pub use project::*;

use axum::extract::FromRef;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::Key;

use crate::config::MIN_SECRET_LENGTH;
use crate::web::views;
use crate::{Database, PortalError, Result};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (shared pool).
    pub db: Database,
    key: Key,
}

impl AppState {
    /// Create the application state, deriving the cookie signing key
    /// from the configured secret.
    pub fn new(db: Database, session_secret: &str) -> Result<Self> {
        if session_secret.len() < MIN_SECRET_LENGTH {
            return Err(PortalError::Config(format!(
                "session secret must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }
        Ok(Self {
            db,
            key: Key::derive_from(session_secret.as_bytes()),
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// Response for a persistence failure: a 500 page.
///
/// Store errors are surfaced, never swallowed; the caller is expected
/// to have logged the underlying error already.
pub(crate) fn store_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
}

/// Response for a rejected form: re-render with a 400.
pub(crate) fn form_rejected(page: String) -> Response {
    (StatusCode::BAD_REQUEST, Html(page)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_state_rejects_short_secret() {
        let db = Database::open_in_memory().await.unwrap();
        let result = AppState::new(db, "short");
        assert!(matches!(result, Err(PortalError::Config(_))));
    }

    #[tokio::test]
    async fn test_app_state_accepts_long_secret() {
        let db = Database::open_in_memory().await.unwrap();
        let result = AppState::new(db, "0123456789abcdef0123456789abcdef");
        assert!(result.is_ok());
    }
}
