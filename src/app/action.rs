use crate::app::validate::is_valid_payload;
use crate::domain::{error::ThemeError, models::ThemeRecord};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    SetLoadingState,
    SetThemeClasses,
    SetCurrentThemeClass,
    ToggleTheme,
    LoadState,
    SetDefault,
    FlagPersistedDataLoad,
}

impl ActionKind {
    #[must_use]
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::SetLoadingState,
            ActionKind::SetThemeClasses,
            ActionKind::SetCurrentThemeClass,
            ActionKind::ToggleTheme,
            ActionKind::LoadState,
            ActionKind::SetDefault,
            ActionKind::FlagPersistedDataLoad,
        ]
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::SetLoadingState => "SET_LOADING_STATE",
            ActionKind::SetThemeClasses => "SET_THEME_CLASSES",
            ActionKind::SetCurrentThemeClass => "SET_CURRENT_THEME_CLASS",
            ActionKind::ToggleTheme => "TOGGLE_THEME",
            ActionKind::LoadState => "LOAD_STATE",
            ActionKind::SetDefault => "SET_DEFAULT",
            ActionKind::FlagPersistedDataLoad => "FLAG_PERSISTED_DATA_LOAD",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<ActionKind> {
        Self::all().iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // --- Lifecycle ---
    SetLoadingState(bool),
    FlagPersistedDataLoad(bool),
    LoadState(ThemeRecord),

    // --- Theme list ---
    SetThemeClasses(Vec<String>),
    SetDefault(String),

    // --- Selection ---
    SetCurrentThemeClass(String),
    ToggleTheme,
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SetLoadingState(_) => ActionKind::SetLoadingState,
            Action::FlagPersistedDataLoad(_) => ActionKind::FlagPersistedDataLoad,
            Action::LoadState(_) => ActionKind::LoadState,
            Action::SetThemeClasses(_) => ActionKind::SetThemeClasses,
            Action::SetDefault(_) => ActionKind::SetDefault,
            Action::SetCurrentThemeClass(_) => ActionKind::SetCurrentThemeClass,
            Action::ToggleTheme => ActionKind::ToggleTheme,
        }
    }

    /// The typed variants rule out every shape error except an out-of-range
    /// `LoadState` index.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Action::LoadState(record) => record.is_in_range(),
            _ => true,
        }
    }

    /// Builds a typed action from an action name and an untyped payload.
    /// `Value::Null` stands for an absent payload.
    pub fn from_raw(kind: &str, payload: &Value) -> Result<Action, ThemeError> {
        if !is_valid_payload(kind, payload) {
            return Err(ThemeError::invalid_payload(kind));
        }
        let invalid = || ThemeError::invalid_payload(kind);
        let kind = ActionKind::parse(kind).ok_or_else(invalid)?;

        let action = match kind {
            ActionKind::SetLoadingState => {
                Action::SetLoadingState(payload.as_bool().ok_or_else(invalid)?)
            }
            ActionKind::FlagPersistedDataLoad => {
                Action::FlagPersistedDataLoad(payload.as_bool().ok_or_else(invalid)?)
            }
            ActionKind::SetThemeClasses => Action::SetThemeClasses(
                serde_json::from_value(payload.clone()).map_err(|_| invalid())?,
            ),
            ActionKind::SetCurrentThemeClass => {
                Action::SetCurrentThemeClass(payload.as_str().ok_or_else(invalid)?.to_string())
            }
            ActionKind::SetDefault => {
                Action::SetDefault(payload.as_str().ok_or_else(invalid)?.to_string())
            }
            ActionKind::ToggleTheme => Action::ToggleTheme,
            ActionKind::LoadState => {
                Action::LoadState(record_from_value(payload).ok_or_else(invalid)?)
            }
        };
        Ok(action)
    }
}

// Extra keys are ignored here; only the persisted wire format is strict.
fn record_from_value(payload: &Value) -> Option<ThemeRecord> {
    let object = payload.as_object()?;
    let current = usize::try_from(object.get("current")?.as_u64()?).ok()?;
    let theme_classes = serde_json::from_value(object.get("theme_classes")?.clone()).ok()?;
    Some(ThemeRecord::new(current, theme_classes))
}
