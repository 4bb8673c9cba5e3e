pub mod health;
pub mod pages;
pub mod villains;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Paths are registered in full rather than nested so that both the
/// trailing-slash forms the pages use and the bare forms resolve.
///
/// ```text
/// /api/                      endpoint directory (GET)
/// /api/villains/             list villains (GET)
/// /api/villains/add          add a villain (POST, form)
/// /api/villains/delete       delete a villain by name (POST, form)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/", get(handlers::villains::list_endpoints))
        .route("/api", get(handlers::villains::list_endpoints))
        .merge(villains::router())
}
