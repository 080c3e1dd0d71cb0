/// Convenience result type used across the crate.
pub type ScratchResult<T> = Result<T, ScratchError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Event-path operations (erasing, estimating, polling effects) never return
/// errors; failure modes there are local no-ops. Errors surface only at
/// construction time (bad config, undecodable image, mismatched buffers).
#[derive(thiserror::Error, Debug)]
pub enum ScratchError {
    /// Invalid user-provided configuration or dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScratchError {
    /// Build a [`ScratchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScratchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
