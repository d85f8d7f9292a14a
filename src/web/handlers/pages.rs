//! Static page handlers. Direct renders, no business logic.

use axum::response::Html;

use crate::web::views;

/// GET /icons
pub async fn icons() -> Html<String> {
    Html(views::static_page("Icons", "Icon reference for the portal."))
}

/// GET /map
pub async fn site_map() -> Html<String> {
    Html(views::static_page("Map", "Office and site map."))
}

/// GET /notifications
pub async fn notifications() -> Html<String> {
    Html(views::static_page("Notifications", "No new notifications."))
}

/// GET /tables
pub async fn tables() -> Html<String> {
    Html(views::static_page("Tables", "Table layout samples."))
}

/// GET /upgrade
pub async fn upgrade() -> Html<String> {
    Html(views::static_page("Upgrade", "Plan upgrade information."))
}

/// GET /user-profile
pub async fn user_profile() -> Html<String> {
    Html(views::static_page("User profile", "Profile settings."))
}
