//! Signup and login handlers.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use super::{form_rejected, store_failure, AppState};
use crate::auth::{hash_password, session, validate_password, verify_password, DUMMY_HASH};
use crate::db::{NewUser, UserRepository};
use crate::web::views;
use crate::PortalError;

/// Signup form fields.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /signup - render the signup form.
pub async fn signup_form() -> Html<String> {
    Html(views::signup_page(None))
}

/// POST /signup - create an account, then redirect to the login page.
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return form_rejected(views::signup_page(Some(
            "Username and password are required",
        )));
    }

    if let Err(e) = validate_password(&form.password) {
        return form_rejected(views::signup_page(Some(&e.to_string())));
    }

    let password_hash = match hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("password hashing failed: {e}");
            return store_failure();
        }
    };

    let repo = UserRepository::new(state.db.pool());
    match repo.create(&NewUser::new(username, password_hash)).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, username, "user registered");
            Redirect::to("/login").into_response()
        }
        Err(PortalError::DuplicateUsername) => {
            form_rejected(views::signup_page(Some("That username is already taken")))
        }
        Err(e) => {
            tracing::error!("user creation failed: {e}");
            store_failure()
        }
    }
}

/// GET /login - render the login form.
pub async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

/// POST /login - verify credentials, issue a session, redirect to the
/// dashboard.
///
/// An unknown username and a wrong password produce the same response;
/// the unknown-username path verifies against a dummy hash so the two
/// do comparable work.
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let repo = UserRepository::new(state.db.pool());
    let user = match repo.get_by_username(form.username.trim()).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("user lookup failed: {e}");
            return store_failure();
        }
    };

    let verified = match &user {
        Some(user) => verify_password(&form.password, &user.password_hash).is_ok(),
        None => {
            let _ = verify_password(&form.password, DUMMY_HASH);
            false
        }
    };

    match (user, verified) {
        (Some(user), true) => {
            tracing::info!(user_id = user.id, "login succeeded");
            let jar = session::issue(jar, user.id);
            (jar, Redirect::to("/dashboard")).into_response()
        }
        _ => {
            tracing::debug!("login rejected");
            form_rejected(views::login_page(Some("Invalid username or password")))
        }
    }
}
