//! Cookie-backed login sessions.
//!
//! A session is one signed cookie carrying the authenticated user's id.
//! It is created on successful login and decays via cookie expiry; there
//! is no logout endpoint.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "portal_session";

/// Issue a session for `user_id`, returning the updated jar.
///
/// The returned jar must be included in the response for the cookie to
/// reach the client.
pub fn issue(jar: SignedCookieJar, user_id: i64) -> SignedCookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Read the authenticated user id from the jar, if any.
///
/// Returns `None` for a missing cookie, a bad signature (the jar never
/// exposes those), or an unparsable value.
pub fn current_user_id(jar: &SignedCookieJar) -> Option<i64> {
    jar.get(SESSION_COOKIE)?.value().parse().ok()
}
