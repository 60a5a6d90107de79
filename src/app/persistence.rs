use crate::app::validate::is_theme_record;
use crate::domain::{models::ThemeRecord, store::KeyValueStore};
use serde_json::Value;
use tracing::{debug, error};

/// Failure-tolerant access to the persisted theme record.
///
/// Nothing here returns an error: store and serialization failures are
/// logged and turned into a no-op or `None`.
pub struct ThemePersistence {
    store: Box<dyn KeyValueStore>,
}

impl ThemePersistence {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn load(&self, key: &str) -> Option<ThemeRecord> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                error!(key = %key, error = %err, "Error retrieving persisted theme data");
                return None;
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                error!(key = %key, error = %err, "Error parsing persisted theme data");
                return None;
            }
        };
        if !is_theme_record(&value) {
            debug!(key = %key, "Ignoring persisted theme data with unexpected shape");
            return None;
        }

        match serde_json::from_value::<ThemeRecord>(value) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(key = %key, error = %err, "Ignoring persisted theme data with unexpected shape");
                None
            }
        }
    }

    pub fn save(&mut self, key: &str, record: &ThemeRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(err) => {
                error!(key = %key, error = %err, "Error serializing theme data");
                return;
            }
        };
        if let Err(err) = self.store.set_item(key, &raw) {
            error!(key = %key, error = %err, "Error setting persisted theme data");
        }
    }

    pub fn clear(&mut self, key: &str) {
        if let Err(err) = self.store.remove_item(key) {
            error!(key = %key, error = %err, "Error clearing persisted theme data");
        }
    }
}
