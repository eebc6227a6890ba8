/// Convenience result type used across Shortform.
pub type ShortformResult<T> = Result<T, ShortformError>;

/// Top-level error taxonomy used by compositor and pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum ShortformError {
    /// Invalid partition or timeline request inputs.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed interpolation control points.
    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    /// Theme name outside the closed theme set.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Malformed collaborator payloads (script JSON, colors, paths).
    #[error("validation error: {0}")]
    Validation(String),

    /// An external collaborator failed.
    #[error("{stage} failed: {message}")]
    Collaborator {
        /// Pipeline stage that reported the failure.
        stage: &'static str,
        /// Failure detail.
        message: String,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShortformError {
    /// Build a [`ShortformError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`ShortformError::InvalidCurve`] value.
    pub fn invalid_curve(msg: impl Into<String>) -> Self {
        Self::InvalidCurve(msg.into())
    }

    /// Build a [`ShortformError::UnknownTheme`] value.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme(name.into())
    }

    /// Build a [`ShortformError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShortformError::Collaborator`] value.
    pub fn collaborator(stage: &'static str, msg: impl Into<String>) -> Self {
        Self::Collaborator {
            stage,
            message: msg.into(),
        }
    }

    /// Build a [`ShortformError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ShortformError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
