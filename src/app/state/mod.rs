use crate::domain::{error::ThemeError, models::ThemeRecord};

pub mod error;

pub use error::ErrorState;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSession {
    // --- Persisted ---
    pub theme_classes: Vec<String>,
    pub current: usize,

    // --- Session only ---
    pub previous: Option<usize>,
    pub is_loading: bool,
    pub loaded_persisted_data: bool,
    pub error: Option<ErrorState>,
}

impl ThemeSession {
    /// A fresh, still-loading session. Fails on an empty theme list.
    pub fn new(theme_classes: Vec<String>) -> Result<Self, ThemeError> {
        if theme_classes.is_empty() {
            return Err(ThemeError::EmptyThemeClasses);
        }
        Ok(Self {
            theme_classes,
            current: 0,
            previous: None,
            is_loading: true,
            loaded_persisted_data: false,
            error: None,
        })
    }

    /// The active class, or `""` for a session built by hand with an
    /// out-of-range index.
    #[must_use]
    pub fn current_theme(&self) -> &str {
        self.theme_classes
            .get(self.current)
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn previous_theme(&self) -> Option<&str> {
        self.previous
            .and_then(|i| self.theme_classes.get(i))
            .map(String::as_str)
    }

    #[must_use]
    pub fn position_of(&self, theme_class: &str) -> Option<usize> {
        self.theme_classes.iter().position(|c| c == theme_class)
    }

    #[must_use]
    pub fn to_record(&self) -> ThemeRecord {
        ThemeRecord::new(self.current, self.theme_classes.clone())
    }

    /// Whether anything the change effect watches differs from `other`.
    #[must_use]
    pub fn theme_changed_from(&self, other: &ThemeSession) -> bool {
        self.current != other.current
            || self.previous != other.previous
            || self.theme_classes != other.theme_classes
    }

    pub(crate) fn with_error(mut self, error: ThemeError) -> Self {
        self.error = Some(ErrorState::new(error));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = ThemeSession::new(vec!["light".into(), "dark".into()]).unwrap();
        assert_eq!(session.current_theme(), "light");
        assert_eq!(session.previous, None);
        assert!(session.is_loading);
        assert!(!session.loaded_persisted_data);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_empty_session_is_rejected() {
        assert_eq!(
            ThemeSession::new(vec![]),
            Err(ThemeError::EmptyThemeClasses)
        );
    }

    #[test]
    fn test_change_detection_ignores_flags() {
        let a = ThemeSession::new(vec!["a".into(), "b".into()]).unwrap();
        let mut b = a.clone();
        b.is_loading = false;
        b.loaded_persisted_data = true;
        assert!(!b.theme_changed_from(&a));
        b.previous = Some(0);
        assert!(b.theme_changed_from(&a));
    }
}
