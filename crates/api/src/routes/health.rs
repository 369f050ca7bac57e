//! Liveness route.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use notebox_db::repositories::NoteRepo;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the note store answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of stored notes; `null` when the store could not be queried.
    pub note_count: Option<i64>,
}

/// GET /health -- counts the notes table to prove the store is usable.
///
/// A missing table reports `degraded` just like an unreachable file.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let note_count = match NoteRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not query notes");
            None
        }
    };
    let db_healthy = note_count.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        note_count,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
