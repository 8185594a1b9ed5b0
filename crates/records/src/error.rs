use thiserror::Error;

/// Result type for record store operations
pub type Result<T> = std::result::Result<T, RecordsError>;

/// Errors raised while loading records or persisting overrides
#[derive(Error, Debug)]
pub enum RecordsError {
    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document is neither valid JSON nor valid TOML, or has the wrong shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Skill name or code outside the known set
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    /// FormKey string that cannot identify a record
    #[error("Invalid form key: {0:?}")]
    InvalidFormKey(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl RecordsError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create an unknown skill error
    pub fn unknown_skill(value: impl Into<String>) -> Self {
        Self::UnknownSkill(value.into())
    }
}
