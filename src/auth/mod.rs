//! Authentication for the portal: password hashing and cookie sessions.

pub mod password;
pub mod session;

pub use password::{
    hash_password, validate_password, verify_password, PasswordError, DUMMY_HASH,
    MAX_PASSWORD_LENGTH,
};
pub use session::{current_user_id, issue, SESSION_COOKIE};
