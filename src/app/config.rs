use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_PERSISTENCE_KEY: &str = "theme-data";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersistConfig {
    pub key: String,
    pub disabled: bool,
    pub clear_on_unload: bool,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_PERSISTENCE_KEY.to_string(),
            disabled: false,
            clear_on_unload: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub theme_classes: Vec<String>,
    pub default_theme: Option<String>,
    pub persist: PersistConfig,
}

impl ThemeConfig {
    pub fn new(theme_classes: Vec<String>) -> Self {
        Self {
            theme_classes,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_default_theme(mut self, theme_class: impl Into<String>) -> Self {
        self.default_theme = Some(theme_class.into());
        self
    }

    #[must_use]
    pub fn with_persist(mut self, persist: PersistConfig) -> Self {
        self.persist = persist;
        self
    }

    /// Reads `~/.config/theme-class/config.toml` if it exists, then applies
    /// environment overrides. A missing or unreadable file yields defaults.
    pub fn load() -> Self {
        let mut config = get_config_path()
            .map(|path| Self::load_or_default(&path))
            .unwrap_or_default();
        config.apply_env(|name| std::env::var(name).ok());
        config
    }

    /// Like [`Self::load_from_path`], but a missing file gives defaults and
    /// a broken one is logged and gives defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(err) => {
                let error = format!("{err:#}");
                warn!(path = %path.display(), error = %error, "Ignoring invalid config file");
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(key) = var("THEME_CLASS_KEY") {
            self.persist.key = key;
        }
        if let Some(theme) = var("THEME_CLASS_DEFAULT") {
            self.default_theme = Some(theme);
        }
        if let Some(flag) = var("THEME_CLASS_PERSIST_DISABLED") {
            self.persist.disabled = matches!(flag.as_str(), "1" | "true" | "yes");
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("theme-class");
        path.push("config.toml");
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.persist.key, "theme-data");
        assert!(!config.persist.disabled);
        assert!(!config.persist.clear_on_unload);
        assert_eq!(config.default_theme, None);
    }

    #[test]
    fn test_load_or_default_falls_back() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("config.toml");
        assert_eq!(ThemeConfig::load_or_default(&path), ThemeConfig::default());

        std::fs::write(&path, "theme_classes = [\"light\"\n[persist\n")?;
        assert!(ThemeConfig::load_from_path(&path).is_err());
        assert_eq!(ThemeConfig::load_or_default(&path), ThemeConfig::default());

        std::fs::write(&path, "theme_classes = [\"light\", \"dark\"]\n")?;
        assert_eq!(
            ThemeConfig::load_or_default(&path).theme_classes,
            ["light", "dark"]
        );
        Ok(())
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
theme_classes = ["light", "dark", "dim"]
default_theme = "dark"

[persist]
key = "my-theme"
clear_on_unload = true
"#,
        )?;

        let config = ThemeConfig::load_from_path(&path)?;
        assert_eq!(config.theme_classes, ["light", "dark", "dim"]);
        assert_eq!(config.default_theme.as_deref(), Some("dark"));
        assert_eq!(config.persist.key, "my-theme");
        assert!(config.persist.clear_on_unload);
        // Unset fields keep their defaults
        assert!(!config.persist.disabled);
        Ok(())
    }

    #[test]
    fn test_load_from_path_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(ThemeConfig::load_from_path(&missing).is_err());

        let broken = temp_dir.path().join("broken.toml");
        std::fs::write(&broken, "theme_classes = 3").unwrap();
        assert!(ThemeConfig::load_from_path(&broken).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("THEME_CLASS_KEY", "override"),
            ("THEME_CLASS_DEFAULT", "dim"),
            ("THEME_CLASS_PERSIST_DISABLED", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = ThemeConfig::new(vec!["light".into()]);
        config.apply_env(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.persist.key, "override");
        assert_eq!(config.default_theme.as_deref(), Some("dim"));
        assert!(config.persist.disabled);
    }
}
