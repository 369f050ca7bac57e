/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and injected with `Router::with_state`; cheap to
/// clone because the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool backing the note store.
    pub pool: notebox_db::DbPool,
}
