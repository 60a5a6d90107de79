//! Tracks which theme class is active, persists the choice and hands the
//! session to the rest of an application through [`ThemeContext`].

pub mod app;
pub mod domain;
pub mod infrastructure;

pub use app::action::{Action, ActionKind};
pub use app::config::{PersistConfig, ThemeConfig};
pub use app::context::ThemeContext;
pub use app::controller::ThemeController;
pub use app::effect::{ClassList, NoopChange, ThemeChange};
pub use app::state::{ErrorState, ThemeSession};
pub use domain::error::{ErrorCategory, StoreError, ThemeError};
pub use domain::models::ThemeRecord;
pub use domain::store::KeyValueStore;
pub use infrastructure::{file_store::FileStore, memory_store::MemoryStore};
