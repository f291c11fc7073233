/// Convenience result type used across Storyproof.
pub type StoryproofResult<T> = Result<T, StoryproofError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only *fatal* conditions surface through this type: inputs that cannot be
/// read or parsed at all, or a schema document that cannot be compiled.
/// Everything a validation run can report about a well-formed document is
/// returned as data inside [`crate::ValidationReport`], never as an error.
#[derive(thiserror::Error, Debug)]
pub enum StoryproofError {
    /// The storyboard or schema input could not be read or parsed as JSON.
    #[error("load error: {0}")]
    Load(String),

    /// The schema document could not be compiled into a validator.
    #[error("schema error: {0}")]
    Schema(String),

    /// Invalid user-provided data outside a validation run (e.g. an unknown
    /// anchor name passed to the layout engine directly).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryproofError {
    /// Build a [`StoryproofError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`StoryproofError::Schema`] value.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Build a [`StoryproofError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoryproofError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
