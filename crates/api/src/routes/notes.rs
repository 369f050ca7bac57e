//! Route definitions for notes, mounted at `/notes` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /                   -> list_notes (?category, search)
/// POST   /                   -> create_note
/// PUT    /{id}               -> update_note
/// DELETE /{id}               -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/{id}", put(notes::update_note).delete(notes::delete_note))
}
