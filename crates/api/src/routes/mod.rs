pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /notes                 list, create
/// /notes/{id}            update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/notes", notes::router())
}
