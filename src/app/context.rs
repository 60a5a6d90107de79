use crate::app::{controller::ThemeController, state::ErrorState};
use crate::domain::models::ThemeRecord;
use std::cell::RefCell;
use std::rc::Rc;

/// A cloneable handle to one [`ThemeController`].
///
/// Hand a clone to every component that needs to read or switch the theme;
/// all clones drive the same session. The controller is torn down when the
/// last clone is dropped.
#[derive(Clone)]
pub struct ThemeContext {
    inner: Rc<RefCell<ThemeController>>,
}

impl ThemeContext {
    pub fn new(controller: ThemeController) -> Self {
        Self {
            inner: Rc::new(RefCell::new(controller)),
        }
    }

    /// Runs `f` against the controller, for queries that borrow from it.
    ///
    /// The controller stays borrowed while `f` runs. Read-only calls on a
    /// clone are fine inside `f`; anything that switches the theme panics.
    pub fn with<R>(&self, f: impl FnOnce(&ThemeController) -> R) -> R {
        f(&*self.inner.borrow())
    }

    /// Runs `f` with exclusive access to the controller.
    ///
    /// `f` must not touch any clone of this handle, and neither may a
    /// [`ThemeChange`](crate::app::effect::ThemeChange) effect that holds
    /// one: the controller is already mutably borrowed and the call panics.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ThemeController) -> R) -> R {
        f(&mut *self.inner.borrow_mut())
    }

    pub fn load_state(&self, record: ThemeRecord) {
        self.inner.borrow_mut().load_state(record);
    }

    pub fn toggle_theme(&self) {
        self.inner.borrow_mut().toggle_theme();
    }

    pub fn set_current_theme(&self, theme_class: impl Into<String>) {
        self.inner.borrow_mut().set_current_theme(theme_class);
    }

    pub fn set_theme_classes(&self, theme_classes: Vec<String>) {
        self.inner.borrow_mut().set_theme_classes(theme_classes);
    }

    pub fn set_default(&self, theme_class: impl Into<String>) {
        self.inner.borrow_mut().set_default(theme_class);
    }

    pub fn clear_persisted_theme_data(&self) {
        self.inner.borrow_mut().clear_persisted_theme_data();
    }

    #[must_use]
    pub fn current_theme(&self) -> String {
        self.inner.borrow().current_theme().to_string()
    }

    #[must_use]
    pub fn theme_classes(&self) -> Vec<String> {
        self.inner.borrow().theme_classes().to_vec()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.borrow().is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<ErrorState> {
        self.inner.borrow().error().cloned()
    }

    #[must_use]
    pub fn loaded_persisted_data(&self) -> bool {
        self.inner.borrow().loaded_persisted_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ThemeConfig;
    use crate::infrastructure::memory_store::MemoryStore;

    fn context() -> ThemeContext {
        let config = ThemeConfig::new(vec!["light".into(), "dark".into(), "dim".into()]);
        ThemeContext::new(ThemeController::new(config, MemoryStore::new()).unwrap())
    }

    #[test]
    fn test_clones_share_session() {
        let header = context();
        let footer = header.clone();

        header.toggle_theme();
        assert_eq!(footer.current_theme(), "dark");

        footer.set_default("dim");
        assert_eq!(header.theme_classes(), ["dim", "light", "dark"]);
        assert_eq!(header.current_theme(), "dim");
    }

    #[test]
    fn test_errors_visible_through_handle() {
        let ctx = context();
        ctx.set_current_theme("sepia");
        assert!(ctx.error().is_some());
        assert_eq!(ctx.with(|c| c.state().current), 0);

        ctx.with_mut(|c| c.set_current_theme("dim"));
        assert!(ctx.error().is_none());
        assert!(!ctx.is_loading());
        assert!(!ctx.loaded_persisted_data());
    }

    #[test]
    fn test_reads_nest_inside_with() {
        let ctx = context();
        let other = ctx.clone();
        ctx.toggle_theme();

        let (current, via_clone) =
            ctx.with(|c| (c.current_theme().to_string(), other.current_theme()));
        assert_eq!(current, "dark");
        assert_eq!(via_clone, "dark");
    }

    #[test]
    #[should_panic(expected = "already mutably borrowed")]
    fn test_reentry_from_with_mut_panics() {
        let ctx = context();
        let other = ctx.clone();
        ctx.with_mut(|_| other.current_theme());
    }

    #[test]
    fn test_last_clone_unmounts() {
        let store = MemoryStore::new();
        let mut config = ThemeConfig::new(vec!["light".into(), "dark".into()]);
        config.persist.clear_on_unload = true;
        let ctx = ThemeContext::new(ThemeController::new(config, store.clone()).unwrap());
        let other = ctx.clone();

        ctx.toggle_theme();
        drop(ctx);
        assert!(store.contains("theme-data"));
        drop(other);
        assert!(!store.contains("theme-data"));
    }
}
