//! Note request bodies, validation rules and list filters.
//!
//! Create and update share one body shape ([`NoteInput`]) but differ in how
//! the category is resolved: create falls back to [`DEFAULT_CATEGORY`] only
//! when the key is absent, update stores whatever the caller sent, including
//! nothing.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors.
pub const NOTE_ENTITY: &str = "Note";

/// Category assigned on create when the body has no `category` key.
pub const DEFAULT_CATEGORY: &str = "Others";

/// Message returned when `title` or `description` is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and Description are required.";

/// Escape character used in `LIKE ... ESCAPE` clauses built from
/// [`NoteFilter::title_pattern`].
pub const LIKE_ESCAPE: char = '\\';

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// JSON body accepted by `POST /notes` and `PUT /notes/{id}`.
///
/// Every field is optional at the serde level so that a missing field
/// surfaces as a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct NoteInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Option<String>>,
}

/// Mark a key that is present in the body, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Validated note content, ready to be bound into a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
}

impl NoteInput {
    /// Validate a create body. An absent category becomes
    /// [`DEFAULT_CATEGORY`]; an explicit `null` is stored as NULL.
    pub fn into_create(mut self) -> Result<NoteFields, CoreError> {
        let category = self
            .category
            .take()
            .unwrap_or_else(|| Some(DEFAULT_CATEGORY.to_string()));
        self.into_fields(category)
    }

    /// Validate an update body. The category is passed through untouched,
    /// so an omitted or `null` category clears the stored one.
    pub fn into_update(mut self) -> Result<NoteFields, CoreError> {
        let category = self.category.take().flatten();
        self.into_fields(category)
    }

    fn into_fields(self, category: Option<String>) -> Result<NoteFields, CoreError> {
        self.validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        match (self.title, self.description) {
            (Some(title), Some(description)) => Ok(NoteFields {
                title,
                description,
                category,
            }),
            _ => Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// List filters
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notes?category=&search=`.
///
/// Empty values are treated the same as absent ones.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NoteFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl NoteFilter {
    /// Exact-match category constraint, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// `LIKE` pattern matching titles that contain `search` literally.
    pub fn title_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)))
    }
}

/// Escape `LIKE` wildcards so the input matches only itself.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == '%' || ch == '_' || ch == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}
