use crate::error::{AwsidError, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_AWS_BIN: &str = "aws";

pub const ENV_CONFIG_DIR: &str = "AWSID_CONFIG_DIR";
pub const ENV_ACCOUNT_INFO: &str = "AWSID_ACCOUNT_INFO";
pub const ENV_AWS_BIN: &str = "AWSID_AWS_BIN";

/// Optional settings read from `config.json` in the awsid config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    /// Path of the account cache (defaults to `~/.aws/account_info`)
    #[serde(default)]
    pub cache_file: Option<PathBuf>,

    /// Executable used to list accounts
    #[serde(default)]
    pub aws_bin: Option<String>,

    #[serde(default)]
    pub profile: Option<String>,

    #[serde(default)]
    pub region: Option<String>,
}

impl FileConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FileConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Settings for one invocation. Built once at startup and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsidConfig {
    pub cache_file: PathBuf,
    pub aws_bin: String,
    pub profile: Option<String>,
    pub region: Option<String>,
    pub version: &'static str,
}

impl AwsidConfig {
    pub fn new(cache_file: PathBuf) -> Self {
        Self {
            cache_file,
            aws_bin: DEFAULT_AWS_BIN.to_string(),
            profile: None,
            region: None,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Defaults, then `config.json`, then environment overrides.
    pub fn load() -> Result<Self> {
        let file_config = match config_dir() {
            Some(dir) => FileConfig::load(dir)?,
            None => FileConfig::default(),
        };

        let cache_file = match std::env::var_os(ENV_ACCOUNT_INFO) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => match file_config.cache_file.clone() {
                Some(path) => path,
                None => default_cache_file()?,
            },
        };

        let mut config = Self::new(cache_file).with_file_config(file_config);
        if let Ok(bin) = std::env::var(ENV_AWS_BIN) {
            if !bin.is_empty() {
                config.aws_bin = bin;
            }
        }
        Ok(config)
    }

    fn with_file_config(mut self, file_config: FileConfig) -> Self {
        if let Some(bin) = file_config.aws_bin {
            self.aws_bin = bin;
        }
        self.profile = file_config.profile;
        self.region = file_config.region;
        self
    }

    /// Apply `--profile` / `--region`; `None` keeps the configured value.
    pub fn with_overrides(mut self, profile: Option<String>, region: Option<String>) -> Self {
        if profile.is_some() {
            self.profile = profile;
        }
        if region.is_some() {
            self.region = region;
        }
        self
    }
}

fn config_dir() -> Option<PathBuf> {
    match std::env::var_os(ENV_CONFIG_DIR) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => ProjectDirs::from("com", "awsid", "awsid").map(|dirs| dirs.config_dir().to_path_buf()),
    }
}

fn default_cache_file() -> Result<PathBuf> {
    let base = BaseDirs::new()
        .ok_or_else(|| AwsidError::Config("Could not determine home directory".to_string()))?;
    Ok(base.home_dir().join(".aws").join("account_info"))
}
