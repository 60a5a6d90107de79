use super::error::StoreError;

/// A string key-value store the theme session persists into.
///
/// Implementations may fail on any call; the persistence adapter absorbs
/// those failures.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    // Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}
