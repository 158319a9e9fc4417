use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hub client settings
    #[serde(default)]
    pub hub: HubConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Directory for unpacked modules (default: <cache dir>/tfhub_modules)
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Request timeout in seconds; unset leaves the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent to the hub
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Draw a progress bar on stderr while downloading
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

fn default_user_agent() -> String {
    format!("actionhub/{}", env!("CARGO_PKG_VERSION"))
}

fn default_show_progress() -> bool {
    true
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            timeout_secs: None,
            user_agent: default_user_agent(),
            show_progress: default_show_progress(),
        }
    }
}

impl HubConfig {
    /// The configured cache directory, or the platform default.
    pub fn resolved_cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(Config::default_cache_dir)
    }
}

impl Config {
    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("dev", "actionhub", "actionhub")
    }

    /// Load config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the config file path: <config dir>/actionhub/config.toml
    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Default module cache; falls back to the system temp dir when no home
    /// directory can be found.
    pub fn default_cache_dir() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.cache_dir().join("tfhub_modules"))
            .unwrap_or_else(|| std::env::temp_dir().join("tfhub_modules"))
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "hub.cache_dir" => Ok(self
                .hub
                .cache_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "hub.timeout_secs" => Ok(self
                .hub
                .timeout_secs
                .map(|t| t.to_string())
                .unwrap_or_default()),
            "hub.user_agent" => Ok(self.hub.user_agent.clone()),
            "hub.show_progress" => Ok(self.hub.show_progress.to_string()),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
    }

    /// Set a dotted key; an empty value clears optional settings.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "hub.cache_dir" => {
                self.hub.cache_dir = if value.is_empty() {
                    None
                } else {
                    Some(value.into())
                }
            }
            "hub.timeout_secs" => {
                self.hub.timeout_secs = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                }
            }
            "hub.user_agent" => self.hub.user_agent = value.to_string(),
            "hub.show_progress" => self.hub.show_progress = value.parse()?,
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let config = Config::load_from(&dir.path().join("config.toml")).expect("load");
        assert_eq!(config, Config::default());
        assert!(config.hub.show_progress);
        assert!(config.hub.user_agent.starts_with("actionhub/"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[hub]\ntimeout_secs = 30\n").expect("write");

        let config = Config::load_from(&path).expect("load");
        assert_eq!(config.hub.timeout_secs, Some(30));
        assert_eq!(config.hub.cache_dir, None);
        assert!(config.hub.show_progress);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("hub.cache_dir", "/tmp/modules").expect("set");
        config.set("hub.show_progress", "false").expect("set");
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, config);
        assert_eq!(loaded.hub.resolved_cache_dir(), PathBuf::from("/tmp/modules"));
    }

    #[test]
    fn set_and_clear_optional_keys() {
        let mut config = Config::default();
        config.set("hub.timeout_secs", "90").expect("set");
        assert_eq!(config.get("hub.timeout_secs").expect("get"), "90");

        config.set("hub.timeout_secs", "").expect("clear");
        assert_eq!(config.hub.timeout_secs, None);
        assert_eq!(config.get("hub.timeout_secs").expect("get"), "");
    }

    #[test]
    fn unknown_keys_and_bad_values_are_rejected() {
        let mut config = Config::default();
        assert!(config.get("daemon.port").is_err());
        assert!(config.set("daemon.port", "1").is_err());
        assert!(config.set("hub.timeout_secs", "soon").is_err());
        assert!(config.set("hub.show_progress", "maybe").is_err());
    }

    #[test]
    fn default_cache_dir_is_tfhub_modules() {
        assert!(Config::default_cache_dir().ends_with("tfhub_modules"));
    }
}
