use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("a recipe search needs at least one ingredient")]
    InvalidQuery,

    #[error("label detection failed: {0}")]
    DetectionFailure(String),

    #[error("entity analysis failed: {0}")]
    AnalysisFailure(String),

    #[error("recipe search failed: {0}")]
    SearchFailure(String),

    #[error("image storage failed: {0}")]
    StorageFailure(String),

    #[error("file too large")]
    FileTooLarge,

    #[error("unsupported media: {0}")]
    UnsupportedMedia(String),

    #[error("internal server error")]
    InternalServerError,
}

impl CoreError {
    /// True for errors caused by the caller's input rather than by a collaborator.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::Validation(_)
                | CoreError::InvalidQuery
                | CoreError::FileTooLarge
                | CoreError::UnsupportedMedia(_)
        )
    }
}
