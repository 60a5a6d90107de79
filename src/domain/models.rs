use serde::{Deserialize, Serialize};

/// The persisted projection of a theme session.
///
/// Only `current` and `theme_classes` survive a restart; `previous`, the
/// loading flag and any pending error are session-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeRecord {
    pub current: usize,
    pub theme_classes: Vec<String>,
}

impl ThemeRecord {
    pub fn new(current: usize, theme_classes: Vec<String>) -> Self {
        Self {
            current,
            theme_classes,
        }
    }

    /// `current` points inside a non-empty `theme_classes`.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        self.current < self.theme_classes.len()
    }

    #[must_use]
    pub fn current_theme(&self) -> Option<&str> {
        self.theme_classes.get(self.current).map(String::as_str)
    }
}
