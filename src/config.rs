//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the tasks file lives; `~/` expands to the home directory.
    #[serde(default)]
    pub data_file: Option<String>,

    #[serde(default)]
    pub prioritizer: PrioritizerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizerConfig {
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI-compatible API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; the OPENAI_API_KEY environment variable is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Timeout for one prioritization call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PrioritizerConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Directory holding config.toml and, by default, the tasks file.
pub fn app_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Cannot find config directory")?;
    Ok(base.join("taskling"))
}

fn config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}

/// Resolve the tasks file for this invocation: the explicit flag wins,
/// then the config override, then tasks.json next to the config file.
/// The result is threaded into every store so nothing reads a
/// process-wide default.
pub fn tasks_file_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    let config = Config::load()?;
    if let Some(configured) = config.data_file {
        return Ok(expand_home(&configured));
    }

    Ok(app_dir()?.join("tasks.json"))
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn point_env_at(dir: &tempfile::TempDir) {
        std::env::set_var("HOME", dir.path());
        std::env::set_var("XDG_CONFIG_HOME", dir.path().join(".config"));
    }

    #[test]
    fn test_config_deserialize_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.data_file.is_none());
        assert_eq!(config.prioritizer.model, "gpt-4o-mini");
        assert_eq!(config.prioritizer.base_url, "https://api.openai.com/v1");
        assert!(config.prioritizer.api_key.is_none());
        assert_eq!(config.prioritizer.timeout_secs, 30);
    }

    #[test]
    fn test_config_deserialize_partial_toml() {
        let toml = r#"
            data_file = "~/todo/tasks.json"

            [prioritizer]
            model = "gpt-4.1"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.data_file.as_deref(), Some("~/todo/tasks.json"));
        assert_eq!(config.prioritizer.model, "gpt-4.1");
        // Fields not mentioned keep their defaults.
        assert_eq!(config.prioritizer.timeout_secs, 30);
    }

    #[test]
    fn test_flag_short_circuits_resolution() {
        let explicit = PathBuf::from("/tmp/somewhere/else.json");
        let resolved = tasks_file_path(Some(explicit.clone())).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    #[serial]
    fn test_default_tasks_file_lives_in_app_dir() {
        let temp = tempdir().unwrap();
        point_env_at(&temp);

        let resolved = tasks_file_path(None).unwrap();
        assert!(resolved.ends_with("taskling/tasks.json"));
        assert!(resolved.starts_with(temp.path()));
    }

    #[test]
    #[serial]
    fn test_configured_data_file_expands_home() {
        let temp = tempdir().unwrap();
        point_env_at(&temp);

        let dir = app_dir().unwrap();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "data_file = \"~/todo/tasks.json\"").unwrap();

        let resolved = tasks_file_path(None).unwrap();
        assert_eq!(resolved, temp.path().join("todo/tasks.json"));
    }

    #[test]
    #[serial]
    fn test_malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        point_env_at(&temp);

        let dir = app_dir().unwrap();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "data_file = [not toml").unwrap();

        assert!(tasks_file_path(None).is_err());
    }
}
