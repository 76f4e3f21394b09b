use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{TagPattern, DEFAULT_TAG_PATTERN, DEFAULT_TAG_PREFIX};
use crate::error::{Result, ScmVersionError};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "gitscmversion.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".gitscmversion.toml";

/// Represents the complete configuration for git-scm-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,
}

/// Returns the default version tag pattern.
fn default_pattern() -> String {
    DEFAULT_TAG_PATTERN.to_string()
}

/// Returns the default prefix stripped from version tags.
fn default_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}

/// Configuration for selecting version tags.
///
/// `pattern` is a regular expression a tag must match to take part in
/// resolution; `prefix` is removed once from the front of the chosen tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_pattern")]
    pub pattern: String,

    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_pattern(),
            prefix: default_prefix(),
        }
    }
}

impl TagsConfig {
    /// Compile the configured tag pattern
    pub fn compile_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(&self.pattern)
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ScmVersionError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitscmversion.toml` in current directory
/// 3. `.gitscmversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    load_config_in(Path::new("."), config_path)
}

/// Same as [load_config], looking for `gitscmversion.toml` in `dir` instead
/// of the current directory.
pub fn load_config_in(dir: &Path, config_path: Option<&str>) -> Result<Config> {
    let local_config = dir.join(LOCAL_CONFIG_FILE);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local_config.exists() {
        fs::read_to_string(local_config)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}
