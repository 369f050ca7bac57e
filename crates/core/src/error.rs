#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched the requested id. `id` is the raw identifier as the
    /// caller supplied it, which may not even be numeric.
    #[error("{entity} not found.")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    Validation(String),
}
