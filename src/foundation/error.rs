/// Convenience result type used across the crate.
pub type EpicycleResult<T> = Result<T, EpicycleError>;

/// Top-level error taxonomy used by parsing, chain building and playback.
#[derive(thiserror::Error, Debug)]
pub enum EpicycleError {
    /// A coefficient token could not be read as a number.
    #[error("parse error: token {index} ({token:?}) is not a number")]
    Parse {
        /// 0-based token position in the input string.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a drawing surface.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EpicycleError {
    /// Build an [`EpicycleError::Parse`] value.
    pub fn parse(index: usize, token: impl Into<String>) -> Self {
        Self::Parse {
            index,
            token: token.into(),
        }
    }

    /// Build an [`EpicycleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EpicycleError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build an [`EpicycleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
