use super::{action::Action, state::ThemeSession};
use crate::domain::error::ThemeError;
use serde_json::Value;

/// Computes the session that follows `state` after `action`.
///
/// Never fails: rejected actions come back as a copy of `state` with
/// `error` set. A successful action always clears a previous error.
#[must_use]
pub fn reduce(state: &ThemeSession, action: Action) -> ThemeSession {
    if !action.is_valid() {
        return state
            .clone()
            .with_error(ThemeError::invalid_payload(action.kind().as_str()));
    }

    let mut next = state.clone();
    next.error = None;

    match action {
        // --- Lifecycle ---
        Action::SetLoadingState(flag) => {
            next.is_loading = flag;
        }
        Action::FlagPersistedDataLoad(flag) => {
            next.loaded_persisted_data = flag;
        }
        Action::LoadState(record) => {
            next.previous = None;
            next.current = record.current;
            next.theme_classes = record.theme_classes;
        }

        // --- Theme list ---
        Action::SetThemeClasses(classes) => {
            if classes.is_empty() {
                return next.with_error(ThemeError::EmptyThemeClasses);
            }
            next.theme_classes = classes;
            next.previous = None;
            next.current = 0;
        }
        Action::SetDefault(theme_class) => {
            let Some(index) = next.position_of(&theme_class) else {
                return next.with_error(ThemeError::ThemeNotFound(theme_class));
            };
            let n = next.theme_classes.len();
            next.theme_classes.rotate_left(index);
            next.previous = next.previous.map(|p| rotated_index(p, index, n));
            next.current = 0;
        }

        // --- Selection ---
        Action::SetCurrentThemeClass(theme_class) => {
            let Some(index) = next.position_of(&theme_class) else {
                return next.with_error(ThemeError::ThemeNotFound(theme_class));
            };
            next.previous = Some(next.current);
            next.current = index;
        }
        Action::ToggleTheme => {
            let Some(index) = (next.current + 1).checked_rem(next.theme_classes.len()) else {
                return next.with_error(ThemeError::EmptyThemeClasses);
            };
            next.previous = Some(next.current);
            next.current = index;
        }
    }

    next
}

/// Untyped entry point: validates `payload` against `kind` first.
#[must_use]
pub fn reduce_raw(state: &ThemeSession, kind: &str, payload: &Value) -> ThemeSession {
    match Action::from_raw(kind, payload) {
        Ok(action) => reduce(state, action),
        Err(err) => state.clone().with_error(err),
    }
}

/// Where index `k` lands after rotating a list of `n` left by `by`.
fn rotated_index(k: usize, by: usize, n: usize) -> usize {
    (k + n - by % n) % n
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
