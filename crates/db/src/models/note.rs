//! Note model.

use notebox_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notes` table, serialized as-is by `GET /notes`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
