use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum FiError {
    /// Generic flake-installable error.
    #[error("Error: {0}")]
    Error(String),
    /// Io Error
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Installable: {0}")]
    Installable(#[from] flake_installable::error::InstallableError),
}
