use crate::Case;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_case: Case,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_case: Case::default(),
            color: default_color(),
        }
    }
}

/// One config file. Fields left out of the file leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub default_case: Option<Case>,
    pub color: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_case: Option<Case>) -> Result<Self> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), Path::new(LOCAL_CONFIG_FILE), cli_case)
    }

    pub fn load_from(
        global_path: Option<&Path>,
        local_path: &Path,
        cli_case: Option<Case>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                let global_config = ConfigLayer::from_file(global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        if local_path.exists() {
            debug!(path = %local_path.display(), "loading local config");
            let local_config = ConfigLayer::from_file(local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(case) = cli_case {
            config.default_case = case;
        }

        debug!(case = %config.default_case, color = config.color, "resolved config");
        Ok(config)
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(case) = layer.default_case {
            self.default_case = case;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_case, Case::Kebab);
        assert!(config.color);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = ConfigLayer {
            default_case: Some(Case::Dot),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.default_case, Case::Dot);
        assert!(merged.color);
    }

    #[test]
    fn test_local_overrides_global_and_cli_overrides_both() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "default_case = \"camel\"\ncolor = false\n").unwrap();
        fs::write(&local, "default_case = \"dot\"\n").unwrap();

        let config = Config::load_from(Some(&global), &local, None).unwrap();
        assert_eq!(config.default_case, Case::Dot);
        assert!(!config.color);

        let config = Config::load_from(Some(&global), &local, Some(Case::Kebab)).unwrap();
        assert_eq!(config.default_case, Case::Kebab);
    }

    #[test]
    fn test_local_can_restore_default_values() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "default_case = \"camel\"\ncolor = false\n").unwrap();
        fs::write(&local, "default_case = \"kebab\"\ncolor = true\n").unwrap();

        let config = Config::load_from(Some(&global), &local, None).unwrap();
        assert_eq!(config.default_case, Case::Kebab);
        assert!(config.color);
    }

    #[test]
    fn test_empty_layer_keeps_lower_layer() {
        let merged = Config::default()
            .merge(ConfigLayer {
                default_case: Some(Case::Camel),
                color: Some(false),
            })
            .merge(ConfigLayer::default());
        assert_eq!(merged.default_case, Case::Camel);
        assert!(!merged.color);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config =
            Config::load_from(None, &dir.path().join("absent.toml"), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join(".recase.toml");
        fs::write(&local, "default_case = \"snake\"\n").unwrap();

        let err = Config::load_from(None, &local, None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
