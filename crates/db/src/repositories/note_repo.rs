//! Repository for the `notes` table.

use notebox_core::notes::{NoteFields, NoteFilter, LIKE_ESCAPE};
use notebox_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::note::Note;
use crate::schema::NOW_SQL;

/// Column list for notes queries.
const COLUMNS: &str = "id, title, description, category, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the id the store assigned.
    ///
    /// Both timestamps come from the column defaults, so they are equal and
    /// share the text format of every other row in the table.
    pub async fn create(pool: &SqlitePool, fields: &NoteFields) -> Result<DbId, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO notes (title, description, category) VALUES (?, ?, ?)")
                .bind(&fields.title)
                .bind(&fields.description)
                .bind(&fields.category)
                .execute(pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    /// List notes matching `filter`, newest first.
    ///
    /// Ties on `created_at` fall back to the id so the order is total.
    pub async fn list(pool: &SqlitePool, filter: &NoteFilter) -> Result<Vec<Note>, sqlx::Error> {
        let category = filter.category();
        let title_pattern = filter.title_pattern();

        // Only fixed fragments go into the SQL text; values are bound below
        // in the same order.
        let mut conditions = Vec::new();
        if category.is_some() {
            conditions.push("category = ?".to_string());
        }
        if title_pattern.is_some() {
            conditions.push(format!("title LIKE ? ESCAPE '{LIKE_ESCAPE}'"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM notes {where_clause} ORDER BY created_at DESC, id DESC"
        );

        let mut q = sqlx::query_as::<_, Note>(&query);
        if let Some(category) = category {
            q = q.bind(category);
        }
        if let Some(pattern) = title_pattern {
            q = q.bind(pattern);
        }
        q.fetch_all(pool).await
    }

    /// Replace a note's content and refresh `updated_at`.
    ///
    /// Returns the number of rows affected; 0 means no note has `id`.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        fields: &NoteFields,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET title = ?, description = ?, category = ?, updated_at = {NOW_SQL}
             WHERE id = ?"
        );
        let result = sqlx::query(&query)
            .bind(&fields.title)
            .bind(&fields.description)
            .bind(&fields.category)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count every note in the table.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(pool)
            .await
    }

    /// Delete a note by id. Returns the number of rows affected.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
