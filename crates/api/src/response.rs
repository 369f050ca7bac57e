//! Response payload types for note handlers.
//!
//! Bodies are returned bare, without an envelope. `GET /notes` serializes
//! [`notebox_db::models::note::Note`] rows directly; create and update
//! echo a [`NoteSummary`].

use notebox_core::notes::NoteFields;
use notebox_core::types::DbId;
use serde::Serialize;

/// `{id, title, description, category}` echoed by create and update.
///
/// Timestamps are intentionally absent.
#[derive(Debug, Serialize)]
pub struct NoteSummary {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
}

impl NoteSummary {
    pub fn new(id: DbId, fields: NoteFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            category: fields.category,
        }
    }
}
