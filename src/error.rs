//! Section Errors
//!
//! Failures raised while driving expandable sections.

/// Common result type for section operations
pub type SectionResult<T> = Result<T, SectionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// No element carries the given id
    MissingElement(String),
    /// The browser rejected a DOM call
    Script(String),
    /// Section configuration could not be used
    InvalidConfig(String),
}

impl std::fmt::Display for SectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionError::MissingElement(id) => write!(f, "No element with id '{}'", id),
            SectionError::Script(msg) => write!(f, "Script error: {}", msg),
            SectionError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for SectionError {}

impl From<serde_json::Error> for SectionError {
    fn from(err: serde_json::Error) -> Self {
        SectionError::InvalidConfig(err.to_string())
    }
}
