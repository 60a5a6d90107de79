use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Side effect run after the theme selection or list changes.
pub trait ThemeChange {
    fn on_change(&mut self, current: usize, previous: Option<usize>, theme_classes: &[String]);
}

impl<F> ThemeChange for F
where
    F: FnMut(usize, Option<usize>, &[String]),
{
    fn on_change(&mut self, current: usize, previous: Option<usize>, theme_classes: &[String]) {
        self(current, previous, theme_classes);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChange;

impl ThemeChange for NoopChange {
    fn on_change(&mut self, _: usize, _: Option<usize>, _: &[String]) {}
}

/// The set of classes applied to a root element.
///
/// On change the previous theme class is removed and the current one added,
/// leaving unrelated classes alone. Clones share the same set so a renderer
/// can keep one while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    pub fn remove(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ThemeChange for ClassList {
    fn on_change(&mut self, current: usize, previous: Option<usize>, theme_classes: &[String]) {
        if let Some(previous_class) = previous.and_then(|p| theme_classes.get(p)) {
            self.remove(previous_class);
        }
        if let Some(current_class) = theme_classes.get(current) {
            self.add(current_class);
        }
    }
}
