//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum_test::{TestResponse, TestServer};
use portal::{create_router, AppState, Database};

/// Session secret used by every test server.
pub const TEST_SECRET: &str = "test-secret-0123456789abcdef0123456789abcdef";

/// Create a test server backed by a fresh in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory().await.expect("in-memory database");
    let server = server_for(&db);
    (server, db)
}

/// Create a test server on top of an existing database.
///
/// Each server keeps its own cookie jar, so two servers over one
/// database act as two independent browsers.
pub fn server_for(db: &Database) -> TestServer {
    let state = AppState::new(db.clone(), TEST_SECRET).expect("app state");
    let mut server = TestServer::new(create_router(state, "assets")).expect("test server");
    server.save_cookies();
    server
}

/// Submit the signup form.
pub async fn signup(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/signup")
        .form(&[("username", username), ("password", password)])
        .await
}

/// Submit the login form.
pub async fn login(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await
}

/// Submit the project registration form with only the required fields.
pub async fn register_project(
    server: &TestServer,
    name: &str,
    start_date: &str,
    end_date: &str,
) -> TestResponse {
    server
        .post("/register")
        .form(&[
            ("name", name),
            ("start_date", start_date),
            ("end_date", end_date),
        ])
        .await
}
