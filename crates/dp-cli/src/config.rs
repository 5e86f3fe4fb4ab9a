//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use dp_core::{Category, CategoryRegistry, RegistryError};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one file per day.
    pub data_dir: PathBuf,

    /// Grid lines per hour that moved events snap to.
    pub snap_resolution: u32,

    /// Known categories and their priorities.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("snap_resolution", &self.snap_resolution)
            .field("categories", &self.categories.len())
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_dir: data_dir.join("days"),
            snap_resolution: 12,
            categories: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (DP_*)
        figment = figment.merge(Env::prefixed("DP_"));

        figment.extract()
    }

    /// The category registry described by `categories`.
    pub fn registry(&self) -> Result<CategoryRegistry, RegistryError> {
        CategoryRegistry::new(self.categories.iter().cloned())
    }
}

/// Returns the platform-specific config directory for dayplan.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dayplan"))
}

/// Returns the platform-specific data directory for dayplan.
///
/// On Linux: `~/.local/share/dayplan`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("dayplan"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_dirs_data_path_ends_with_dayplan() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "dayplan");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_days() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.data_dir, data_dir.join("days"));
        assert_eq!(config.snap_resolution, 12);
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_load_categories_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
snap_resolution = 4

[[categories]]
name = "work"
priority = 3

[[categories]]
name = "eating"
"#
        )
        .unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.snap_resolution, 4);

        let registry = config.registry().unwrap();
        assert_eq!(registry.get("work"), Some(&Category::new("work", 3)));
        assert_eq!(registry.get("eating"), Some(&Category::new("eating", 0)));
    }

    #[test]
    fn test_conflicting_categories_are_rejected() {
        let config = Config {
            categories: vec![Category::new("work", 1), Category::new("work", 2)],
            ..Config::default()
        };
        assert!(config.registry().is_err());
    }
}
