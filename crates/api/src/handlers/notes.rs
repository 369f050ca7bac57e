//! Handlers for the notes resource.
//!
//! Each handler validates its input, issues exactly one store call and maps
//! the outcome to a response.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use notebox_core::error::CoreError;
use notebox_core::notes::{NoteFilter, NoteInput, NOTE_ENTITY};
use notebox_core::types::DbId;
use notebox_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::response::NoteSummary;
use crate::state::AppState;

/// POST /notes
///
/// Create a note. An absent `category` defaults to `Others`.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let fields = input.into_create()?;

    let id = NoteRepo::create(&state.pool, &fields).await?;

    tracing::info!(
        note_id = id,
        category = ?fields.category,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(NoteSummary::new(id, fields))))
}

/// GET /notes?category=&search=
///
/// List notes newest first, optionally filtered by exact category and by
/// title substring.
pub async fn list_notes(
    State(state): State<AppState>,
    params: Result<Query<NoteFilter>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(filter) = params?;
    let notes = NoteRepo::list(&state.pool, &filter).await?;
    Ok(Json(notes))
}

/// PUT /notes/{id}
///
/// Replace a note's title, description and category. The category is not
/// defaulted here.
pub async fn update_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let fields = input.into_update()?;
    let id = parse_note_id(raw_id)?;

    let affected = NoteRepo::update(&state.pool, id, &fields).await?;
    if affected == 0 {
        return Err(not_found(id.to_string()));
    }

    tracing::info!(note_id = id, category = ?fields.category, "Note updated");

    Ok(Json(NoteSummary::new(id, fields)))
}

/// DELETE /notes/{id}
///
/// Permanently delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(raw_id)?;

    let affected = NoteRepo::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(not_found(id.to_string()));
    }

    tracing::info!(note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// A path segment that is not an integer can never name a stored note, so
/// it is reported as missing rather than malformed.
fn parse_note_id(raw: String) -> AppResult<DbId> {
    match raw.parse() {
        Ok(id) => Ok(id),
        Err(_) => Err(not_found(raw)),
    }
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: NOTE_ENTITY,
        id,
    })
}
