//! Project repository for the portal.
//!
//! Every read and write takes an explicit owner id; there is no
//! "list all" operation. Projects are created while the owner's session
//! is active and are never updated or deleted.

use sqlx::SqlitePool;

use super::project::{NewProject, Project};
use crate::{PortalError, Result};

/// Repository for project operations, always scoped to an owner.
pub struct ProjectRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProjectRepository<'a> {
    /// Create a new ProjectRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new project owned by `owner_id`.
    ///
    /// The owner id must come from the authenticated session, never from
    /// client input.
    pub async fn create(&self, owner_id: i64, project: &NewProject) -> Result<Project> {
        let result = sqlx::query(
            "INSERT INTO projects (owner_id, name, start_date, end_date, content,
                                   tech_stack, os, environment, assignee, role, memo)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(owner_id)
        .bind(&project.name)
        .bind(&project.start_date)
        .bind(&project.end_date)
        .bind(&project.content)
        .bind(&project.tech_stack)
        .bind(&project.os)
        .bind(&project.environment)
        .bind(&project.assignee)
        .bind(&project.role)
        .bind(&project.memo)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| PortalError::NotFound("project".to_string()))
    }

    /// Get a project by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT id, owner_id, name, start_date, end_date, content, tech_stack,
                    os, environment, assignee, role, memo, created_at, updated_at
             FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(project)
    }

    /// List all projects owned by `owner_id`.
    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, owner_id, name, start_date, end_date, content, tech_stack,
                    os, environment, assignee, role, memo, created_at, updated_at
             FROM projects WHERE owner_id = ? ORDER BY id",
        )
        .bind(owner_id)
        .fetch_all(self.pool)
        .await?;

        Ok(projects)
    }

    /// Count all projects regardless of owner.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewUser, UserRepository};
    use crate::Database;

    async fn setup_with_user(username: &str) -> (Database, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let user = UserRepository::new(db.pool())
            .create(&NewUser::new(username, "hash"))
            .await
            .unwrap();
        (db, user.id)
    }

    #[tokio::test]
    async fn test_create_and_list_project() {
        let (db, owner_id) = setup_with_user("alice").await;
        let repo = ProjectRepository::new(db.pool());

        let mut new_project = NewProject::new("X", "2024-01-01", "2024-02-01");
        new_project.tech_stack = "rust, axum".to_string();
        new_project.memo = "internal".to_string();

        let created = repo.create(owner_id, &new_project).await.unwrap();
        assert_eq!(created.owner_id, owner_id);
        assert_eq!(created.name, "X");
        assert_eq!(created.tech_stack, "rust, axum");

        let listed = repo.list_by_owner(owner_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }

    #[tokio::test]
    async fn test_list_by_owner_empty() {
        let (db, owner_id) = setup_with_user("bob").await;
        let repo = ProjectRepository::new(db.pool());

        let listed = repo.list_by_owner(owner_id).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_ownership_isolation() {
        let db = Database::open_in_memory().await.unwrap();
        let users = UserRepository::new(db.pool());
        let alice = users.create(&NewUser::new("alice", "h")).await.unwrap();
        let bob = users.create(&NewUser::new("bob", "h")).await.unwrap();

        let repo = ProjectRepository::new(db.pool());

        // Interleaved creations by the two owners.
        repo.create(alice.id, &NewProject::new("a1", "2024-01-01", "2024-02-01"))
            .await
            .unwrap();
        repo.create(bob.id, &NewProject::new("b1", "2024-01-01", "2024-02-01"))
            .await
            .unwrap();
        repo.create(alice.id, &NewProject::new("a2", "2024-03-01", "2024-04-01"))
            .await
            .unwrap();

        let alices = repo.list_by_owner(alice.id).await.unwrap();
        let bobs = repo.list_by_owner(bob.id).await.unwrap();

        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|p| p.owner_id == alice.id));
        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].name, "b1");
    }
}
