#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown form context: {0}")]
    UnknownContext(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
