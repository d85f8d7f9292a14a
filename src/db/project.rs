//! Project model for the portal.

/// Project entity, owned by exactly one user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID.
    pub id: i64,
    /// Owning user's ID.
    pub owner_id: i64,
    /// Project name.
    pub name: String,
    /// Start date (free-form date string).
    pub start_date: String,
    /// End date (free-form date string).
    pub end_date: String,
    /// Free-text description.
    pub content: String,
    /// Tech stack, stored as text.
    pub tech_stack: String,
    /// Operating system.
    pub os: String,
    /// Environment description.
    pub environment: String,
    /// Person in charge.
    pub assignee: String,
    /// Role held on the project.
    pub role: String,
    /// Free-form memo.
    pub memo: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
}

/// Data for creating a new project.
///
/// The owner is deliberately absent here; it is supplied separately by
/// the repository from the authenticated session.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    /// Project name (required).
    pub name: String,
    /// Start date (required).
    pub start_date: String,
    /// End date (required).
    pub end_date: String,
    /// Free-text description.
    pub content: String,
    /// Tech stack.
    pub tech_stack: String,
    /// Operating system.
    pub os: String,
    /// Environment description.
    pub environment: String,
    /// Person in charge.
    pub assignee: String,
    /// Role held on the project.
    pub role: String,
    /// Free-form memo.
    pub memo: String,
}

impl NewProject {
    /// Create a new project with the required fields.
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_required_fields() {
        let project = NewProject::new("Portal rewrite", "2024-01-01", "2024-02-01");
        assert_eq!(project.name, "Portal rewrite");
        assert_eq!(project.start_date, "2024-01-01");
        assert_eq!(project.end_date, "2024-02-01");
        assert!(project.memo.is_empty());
        assert!(project.tech_stack.is_empty());
    }
}
