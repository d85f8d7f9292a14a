//! User repository for the portal.
//!
//! CRUD operations for the credential store. Users are created once at
//! signup and never updated or deleted.

use sqlx::SqlitePool;

use super::user::{NewUser, User};
use crate::{PortalError, Result};

/// Repository for user operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user.
    ///
    /// Returns the created user with its assigned ID, or
    /// [`PortalError::DuplicateUsername`] if the username is taken.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(&new_user.username)
            .bind(&new_user.password_hash)
            .execute(self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    PortalError::DuplicateUsername
                }
                _ => PortalError::Database(e.to_string()),
            })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| PortalError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at, updated_at
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by username.
    ///
    /// Absence is a distinct `None`, never a zero-value record.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at, updated_at
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("alice", "hash-a"))
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, "hash-a");
        assert!(user.id > 0);

        let found = repo.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.username, "alice");
    }

    #[tokio::test]
    async fn test_get_by_username() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("bob", "hash-b")).await.unwrap();

        let found = repo.get_by_username("bob").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().password_hash, "hash-b");
    }

    #[tokio::test]
    async fn test_get_by_username_absent_is_none() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let found = repo.get_by_username("nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let original = repo
            .create(&NewUser::new("carol", "hash-1"))
            .await
            .unwrap();

        let result = repo.create(&NewUser::new("carol", "hash-2")).await;
        assert!(matches!(result, Err(PortalError::DuplicateUsername)));

        // The original row must be untouched.
        let found = repo.get_by_username("carol").await.unwrap().unwrap();
        assert_eq!(found.id, original.id);
        assert_eq!(found.password_hash, "hash-1");
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
