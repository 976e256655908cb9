#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
