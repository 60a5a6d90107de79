use crate::app::{
    action::Action,
    config::ThemeConfig,
    effect::{ClassList, ThemeChange},
    persistence::ThemePersistence,
    reducer,
    state::{ErrorState, ThemeSession},
};
use crate::domain::{error::ThemeError, models::ThemeRecord, store::KeyValueStore};
use serde_json::Value;
use tracing::{debug, warn};

/// Owns one theme session for its whole lifetime.
///
/// Construction runs the startup sequence: restore the persisted record if
/// there is one, otherwise apply the configured default theme. Afterwards
/// every change to the selection or the theme list is written back to the
/// store and reported to the change effect, unless persistence is disabled.
/// Dropping the controller clears the stored record when `clear_on_unload`
/// is set.
pub struct ThemeController {
    state: ThemeSession,
    config: ThemeConfig,
    persistence: ThemePersistence,
    on_change: Box<dyn ThemeChange>,
}

impl ThemeController {
    /// Uses a fresh [`ClassList`] as the change effect.
    pub fn new(config: ThemeConfig, store: impl KeyValueStore + 'static) -> Result<Self, ThemeError> {
        Self::with_effect(config, store, ClassList::new())
    }

    pub fn with_effect(
        config: ThemeConfig,
        store: impl KeyValueStore + 'static,
        on_change: impl ThemeChange + 'static,
    ) -> Result<Self, ThemeError> {
        let state = ThemeSession::new(config.theme_classes.clone())?;
        let mut controller = Self {
            state,
            config,
            persistence: ThemePersistence::new(store),
            on_change: Box::new(on_change),
        };
        controller.start();
        Ok(controller)
    }

    fn start(&mut self) {
        let initial = self.state.clone();
        let mut restored = false;

        if let Some(record) = self.persistence.load(&self.config.persist.key) {
            debug!(key = %self.config.persist.key, "Restoring persisted theme data");
            self.dispatch(Action::LoadState(record));
            self.dispatch(Action::FlagPersistedDataLoad(true));
            restored = self.state.loaded_persisted_data;
        } else if let Some(default_theme) = self.config.default_theme.clone() {
            self.dispatch(Action::SetDefault(default_theme));
        }
        self.dispatch(Action::SetLoadingState(false));

        // A restore replaces the list, so it counts as a change even when the
        // stored record matches the configured one.
        if restored || self.state.theme_changed_from(&initial) {
            self.sync();
        }
    }

    // --- Dispatch ---

    /// Runs `action` through the reducer and returns the error it left, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<&ErrorState> {
        let kind = action.kind();
        let next = reducer::reduce(&self.state, action);
        self.commit(next);

        match &self.state.error {
            Some(err) => warn!(action = %kind, error = %err.error, "Theme action rejected"),
            None => debug!(action = %kind, current = self.state.current, "Theme action applied"),
        }
        self.state.error.as_ref()
    }

    /// Untyped variant of [`dispatch`](Self::dispatch) for payloads that
    /// arrive as JSON. `Value::Null` means no payload.
    pub fn dispatch_raw(&mut self, kind: &str, payload: &Value) -> Option<&ErrorState> {
        match Action::from_raw(kind, payload) {
            Ok(action) => self.dispatch(action),
            Err(err) => {
                warn!(action = kind, error = %err, "Theme action rejected");
                let next = self.state.clone().with_error(err);
                self.commit(next);
                self.state.error.as_ref()
            }
        }
    }

    fn commit(&mut self, next: ThemeSession) {
        let changed = next.theme_changed_from(&self.state);
        self.state = next;
        if changed {
            self.sync();
        }
    }

    fn sync(&mut self) {
        if self.state.is_loading || self.config.persist.disabled {
            return;
        }
        self.persistence
            .save(&self.config.persist.key, &self.state.to_record());
        self.on_change.on_change(
            self.state.current,
            self.state.previous,
            &self.state.theme_classes,
        );
    }

    // --- Operations ---

    pub fn load_state(&mut self, record: ThemeRecord) {
        self.dispatch(Action::LoadState(record));
    }

    pub fn toggle_theme(&mut self) {
        self.dispatch(Action::ToggleTheme);
    }

    pub fn set_current_theme(&mut self, theme_class: impl Into<String>) {
        self.dispatch(Action::SetCurrentThemeClass(theme_class.into()));
    }

    pub fn set_theme_classes(&mut self, theme_classes: Vec<String>) {
        self.dispatch(Action::SetThemeClasses(theme_classes));
    }

    pub fn set_default(&mut self, theme_class: impl Into<String>) {
        self.dispatch(Action::SetDefault(theme_class.into()));
    }

    pub fn clear_persisted_theme_data(&mut self) {
        self.persistence.clear(&self.config.persist.key);
    }

    /// Tears the controller down. Same as dropping it.
    pub fn unmount(self) {}

    // --- Queries ---

    #[must_use]
    pub fn current_theme(&self) -> &str {
        self.state.current_theme()
    }

    #[must_use]
    pub fn theme_classes(&self) -> &[String] {
        &self.state.theme_classes
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorState> {
        self.state.error.as_ref()
    }

    #[must_use]
    pub fn loaded_persisted_data(&self) -> bool {
        self.state.loaded_persisted_data
    }

    #[must_use]
    pub fn state(&self) -> &ThemeSession {
        &self.state
    }

    #[must_use]
    pub fn persistence_key(&self) -> &str {
        &self.config.persist.key
    }
}

impl Drop for ThemeController {
    fn drop(&mut self) {
        if self.config.persist.clear_on_unload {
            debug!(key = %self.config.persist.key, "Clearing persisted theme data on unload");
            self.persistence.clear(&self.config.persist.key);
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
