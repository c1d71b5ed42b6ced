//! Run configuration (knightpacks.toml)

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "knightpacks.toml";

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map_or_else(|| PathBuf::from("var/cache"), |p| p.join("knightpacks"))
}

fn default_cache_ttl_secs() -> u64 {
    6 * 3600
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("var/data")
}

fn default_files_dir() -> PathBuf {
    PathBuf::from("var/files")
}

fn default_packs_dir() -> PathBuf {
    PathBuf::from("var/packs")
}

fn default_asset_prefix() -> String {
    "modules/knight-compendium/assets".to_string()
}

/// What a failed entity type does to the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure, continue with the next type, exit successfully.
    #[default]
    Report,
    /// Stop at the first failed type and exit with an error.
    Abort,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailurePolicy::Report => "report",
            FailurePolicy::Abort => "abort",
        })
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "report" => Ok(FailurePolicy::Report),
            "abort" => Ok(FailurePolicy::Abort),
            _ => Err(format!("Invalid failure policy '{s}'. Valid values: report, abort")),
        }
    }
}

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root URL of the content API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Optional bearer token
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Response cache directory
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Templates and auxiliary tables
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Pre-placed source images
    #[serde(default = "default_files_dir")]
    pub files_dir: PathBuf,
    /// Compendium output directory
    #[serde(default = "default_packs_dir")]
    pub packs_dir: PathBuf,
    /// Image path prefix inside the tabletop module
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_token: None,
            timeout_secs: default_timeout_secs(),
            cache_dir: default_cache_dir(),
            cache_ttl_secs: default_cache_ttl_secs(),
            data_dir: default_data_dir(),
            files_dir: default_files_dir(),
            packs_dir: default_packs_dir(),
            asset_prefix: default_asset_prefix(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Load `path` when given, else `knightpacks.toml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject values the run cannot work with.
    pub fn validate(&self) -> Result<()> {
        let url = &self.api_base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base_url must be an http(s) URL, got \"{}\"",
                self.api_base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cache_ttl(), Duration::from_secs(21_600));
        assert_eq!(config.failure_policy, FailurePolicy::Report);
    }

    #[test]
    fn test_partial_document() {
        let config = Config::from_toml(
            r#"
            api_base_url = "https://content.example.org/api"
            packs_dir = "out/packs"
            failure_policy = "abort"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://content.example.org/api");
        assert_eq!(config.packs_dir, PathBuf::from("out/packs"));
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.data_dir, PathBuf::from("var/data"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(Config::from_toml("timeout_secs = 0"), Err(Error::Config(_))));
        assert!(matches!(Config::from_toml("api_base_url = \"ftp://x\""), Err(Error::Config(_))));
        assert!(matches!(Config::from_toml("failure_policy = \"retry\""), Err(Error::Config(_))));
    }

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!("ABORT".parse::<FailurePolicy>().unwrap(), FailurePolicy::Abort);
        assert!("ignore".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("knightpacks.toml");
        fs::write(&path, "cache_ttl_secs = 60\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().cache_ttl_secs, 60);
        assert!(Config::load(&dir.path().join("missing.toml")).is_err());
    }
}
