/// Convenience result type used across sigmotion.
pub type SigResult<T> = Result<T, SigError>;

/// Top-level error taxonomy used by the capture/export pipeline.
///
/// Degenerate geometry (empty strokes, empty path lists) is never an error; those inputs have
/// neutral outputs. Errors come from collaborators (fonts, files, rasterizers) and malformed
/// configuration.
#[derive(thiserror::Error, Debug)]
pub enum SigError {
    /// Invalid user-provided data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font lookup, loading, or parsing failed.
    #[error("font error: {0}")]
    Font(String),

    /// Errors while rasterizing a surface or preview frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SigError {
    /// Build a [`SigError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SigError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`SigError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SigError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
