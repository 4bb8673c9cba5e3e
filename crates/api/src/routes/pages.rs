//! Browser pages.
//!
//! ```text
//! GET /            -> villain.html        (card gallery)
//! GET /add         -> addvillain.html     (add form)
//! GET /delete      -> deletevillain.html  (delete form)
//! GET /static/*    -> assets from the same directory
//! ```

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("villain.html")))
        .route_service("/add", ServeFile::new(static_dir.join("addvillain.html")))
        .route_service(
            "/delete",
            ServeFile::new(static_dir.join("deletevillain.html")),
        )
        .nest_service("/static", ServeDir::new(static_dir))
}
