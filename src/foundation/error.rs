/// Convenience result type used across the engine.
pub type ChorioResult<T> = Result<T, ChorioError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChorioError {
    /// Invalid user-provided or routine document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A candidate waypoint would share a start time with an existing one.
    #[error("start time conflict with waypoint '{name}'")]
    Conflict {
        /// Name of the existing waypoint at the contested start time.
        name: String,
    },

    /// The playback source refused an operation (e.g. failed to start).
    #[error("playback error: {0}")]
    Playback(String),

    /// Errors when serializing or deserializing routine documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChorioError {
    /// Build a [`ChorioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChorioError::Conflict`] value naming the existing waypoint.
    pub fn conflict(name: impl Into<String>) -> Self {
        Self::Conflict { name: name.into() }
    }

    /// Build a [`ChorioError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build a [`ChorioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
