/// Convenience result alias used throughout the crate.
pub type ChaseResult<T> = Result<T, ChaseError>;

/// Error type for scene setup, rendering, encoding and capture.
#[derive(thiserror::Error, Debug)]
pub enum ChaseError {
    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster surface failure.
    #[error("render error: {0}")]
    Render(String),

    /// Capture session failure.
    #[error("capture error: {0}")]
    Capture(String),

    /// Encoder process failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Settings (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChaseError {
    /// Build a [`ChaseError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChaseError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChaseError::Capture`].
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`ChaseError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ChaseError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
