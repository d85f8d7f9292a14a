//! Dashboard and project registration handlers (session-gated).

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde::Deserialize;

use super::{form_rejected, store_failure, AppState};
use crate::db::{NewProject, ProjectRepository};
use crate::web::middleware::CurrentUser;
use crate::web::views;

/// Project registration form fields.
///
/// The owner is never part of the form; it is stamped from the session.
#[derive(Debug, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub memo: String,
}

impl ProjectForm {
    fn into_new_project(self) -> NewProject {
        NewProject {
            name: self.name.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            content: self.content,
            tech_stack: self.tech_stack,
            os: self.os,
            environment: self.environment,
            assignee: self.assignee,
            role: self.role,
            memo: self.memo,
        }
    }
}

/// GET /dashboard - list the current user's projects.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Response {
    let repo = ProjectRepository::new(state.db.pool());
    match repo.list_by_owner(user.user_id).await {
        Ok(projects) => Html(views::dashboard_page(&projects)).into_response(),
        Err(e) => {
            tracing::error!("project listing failed: {e}");
            store_failure()
        }
    }
}

/// GET /register - render the project registration form.
pub async fn register_form() -> Html<String> {
    Html(views::register_page(None))
}

/// POST /register - create a project for the current user, then
/// redirect to the dashboard.
pub async fn register_project(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<ProjectForm>,
) -> Response {
    let project = form.into_new_project();
    if project.name.is_empty() || project.start_date.is_empty() || project.end_date.is_empty() {
        return form_rejected(views::register_page(Some(
            "Name, start date and end date are required",
        )));
    }

    let repo = ProjectRepository::new(state.db.pool());
    match repo.create(user.user_id, &project).await {
        Ok(created) => {
            tracing::info!(
                project_id = created.id,
                owner_id = created.owner_id,
                "project registered"
            );
            Redirect::to("/dashboard").into_response()
        }
        Err(e) => {
            tracing::error!("project creation failed: {e}");
            store_failure()
        }
    }
}
