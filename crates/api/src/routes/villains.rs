//! Route definitions for villain cards.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::villains;
use crate::state::AppState;

/// Villain card routes.
///
/// ```text
/// GET  /api/villains/         -> list_villains
/// GET  /api/villains          -> list_villains
/// POST /api/villains/add      -> add_villain
/// POST /api/villains/delete   -> delete_villain
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/villains/", get(villains::list_villains))
        .route("/api/villains", get(villains::list_villains))
        .route("/api/villains/add", post(villains::add_villain))
        .route("/api/villains/delete", post(villains::delete_villain))
}
