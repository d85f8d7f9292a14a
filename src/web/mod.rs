//! Web layer for the portal: routes, handlers, session gate, pages.

pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod views;

pub use handlers::AppState;
pub use middleware::CurrentUser;
pub use router::create_router;
pub use server::WebServer;
