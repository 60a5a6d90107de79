use crate::domain::error::{ErrorCategory, ThemeError};
use chrono::{DateTime, Local};

/// The error left behind by the most recent failed action.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub error: ThemeError,
    pub timestamp: DateTime<Local>,
}

impl ErrorState {
    pub fn new(error: ThemeError) -> Self {
        Self {
            error,
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.error.category()
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// The message prefixed with the local time the action failed.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_describe_includes_time() {
        let mut state = ErrorState::new(ThemeError::ThemeNotFound("sepia".into()));
        state.timestamp = Local.with_ymd_and_hms(2024, 1, 15, 7, 5, 42).unwrap();
        assert_eq!(state.category(), ErrorCategory::Semantic);
        assert!(state.describe().starts_with("[07:05:42] "));
        assert!(state.describe().ends_with(&state.message()));
    }
}
