/// Convenience result type used across Kisekae.
pub type KisekaeResult<T> = Result<T, KisekaeError>;

/// Top-level error taxonomy used by compositing APIs.
#[derive(thiserror::Error, Debug)]
pub enum KisekaeError {
    /// A required override sheet, reference image, or asset could not be found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Caller contract violation (bad grid geometry, out-of-bounds sprite index).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration or image data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KisekaeError {
    /// Build a [`KisekaeError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`KisekaeError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`KisekaeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this error means "the asset is missing" rather than a programming error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
