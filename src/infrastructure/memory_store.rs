use crate::domain::{error::StoreError, store::KeyValueStore};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory store. Clones share the same map, so a value written through
/// one controller is visible to the next one built on a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_items() {
        let mut store = MemoryStore::new();
        let observer = store.clone();

        store.set_item("k", "v").unwrap();
        assert_eq!(observer.get_item("k").unwrap().as_deref(), Some("v"));
        assert!(observer.contains("k"));

        store.remove_item("k").unwrap();
        assert!(!observer.contains("k"));
    }
}
