use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The payload did not match the shape its action kind requires.
    Shape,
    /// The payload was well formed but not applicable to the session.
    Semantic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Type Error: invalid payload for `{kind}` action, check the dispatched action")]
    InvalidPayload { kind: String },
    #[error("Value Error: Theme-classes list must not be empty")]
    EmptyThemeClasses,
    #[error("Invalid Value Error: theme-class `{0}` does not exist in the theme-classes list")]
    ThemeNotFound(String),
}

impl ThemeError {
    pub fn invalid_payload(kind: impl Into<String>) -> Self {
        Self::InvalidPayload { kind: kind.into() }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            ThemeError::InvalidPayload { .. } => ErrorCategory::Shape,
            ThemeError::EmptyThemeClasses | ThemeError::ThemeNotFound(_) => {
                ErrorCategory::Semantic
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
