//! Portal - internal portal site.
//!
//! Users sign up, log in via cookie-backed sessions, and manage project
//! records scoped to their account.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{hash_password, validate_password, verify_password, PasswordError};
pub use config::Config;
pub use db::{Database, NewProject, NewUser, Project, ProjectRepository, User, UserRepository};
pub use error::{PortalError, Result};
pub use web::{create_router, AppState, CurrentUser, WebServer};
