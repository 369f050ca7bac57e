//! Fixed schema for the note store.

/// SQL expression for the current UTC time with millisecond precision.
///
/// Every timestamp in the table is written with this expression so the
/// stored text sorts chronologically. Rows written by `CURRENT_TIMESTAMP`
/// share its `YYYY-MM-DD HH:MM:SS` prefix and still sort correctly.
pub const NOW_SQL: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

/// Statements run in order by [`crate::ensure_schema`].
pub const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT DEFAULT 'Others',
        created_at TIMESTAMP DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
        updated_at TIMESTAMP DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
    )",
    "CREATE INDEX IF NOT EXISTS idx_notes_created_at ON notes (created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_notes_category ON notes (category)",
];
