mod defaults;
mod validation;

use crate::cli::Args;
use crate::error::{CliGptError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{
    default_log_path, default_model, default_role, starter_role, DEFAULT_ENDPOINT,
    PLACEHOLDER_API_KEY,
};
pub use validation::{normalize_endpoint, validate_api_key};

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub log_path: PathBuf,
    pub model: String,
    pub role: String,
    pub source: Option<PathBuf>,
    pub verbose: bool,
}

/// The on-disk configuration mapping. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let (origin, file_config) = match FileConfig::load()? {
            Some(found) => found,
            None => {
                let path = FileConfig::default_path().ok_or_else(|| {
                    CliGptError::ConfigError("cannot locate the home directory".to_string())
                })?;
                FileConfig::write_starter(&path)?;
                eprintln!("Created a starter configuration at {}", path.display());
                let starter = FileConfig::starter();
                (path, starter)
            }
        };

        Self::resolve(args, file_config, &origin, |key| env::var(key).ok())
    }

    /// Merge sources: CLI args > env vars > config file > defaults.
    pub fn resolve<F>(args: &Args, file_config: FileConfig, origin: &Path, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Key: env var > config file
        let api_key = validate_api_key(
            env_lookup("OPENAI_API_KEY").or(file_config.api_key),
            origin,
        )?;

        let api_endpoint = env_lookup("CLIGPT_ENDPOINT")
            .or(file_config.endpoint)
            .map(|endpoint| normalize_endpoint(&endpoint))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let log_path = env_lookup("CLIGPT_LOG_PATH")
            .or(file_config.log_path)
            .unwrap_or_else(default_log_path);

        let model = args
            .model
            .clone()
            .or_else(|| env_lookup("CLIGPT_MODEL"))
            .or(file_config.model)
            .unwrap_or_else(default_model);

        let role = args
            .role
            .clone()
            .or(file_config.role)
            .unwrap_or_else(default_role);

        let verbose = args.verbose
            || env_lookup("CLIGPT_VERBOSE")
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .or(file_config.verbose)
                .unwrap_or(false);

        Ok(Config {
            api_key,
            api_endpoint,
            log_path: PathBuf::from(log_path),
            model,
            role,
            source: file_config.source.map(PathBuf::from),
            verbose,
        })
    }
}

impl FileConfig {
    /// First existing config file, parsed.
    pub fn load() -> anyhow::Result<Option<(PathBuf, Self)>> {
        for path in Self::get_config_paths() {
            if path.exists() {
                let config = Self::load_from(&path)?;
                return Ok(Some((path, config)));
            }
        }

        Ok(None)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".cligpt.yaml"),
            PathBuf::from(".cligpt.yml"),
            PathBuf::from(".cligpt.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".cligpt"));
            paths.push(home_dir.join(".config").join("cligpt").join("cligpt.yaml"));
        }

        paths
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".cligpt"))
    }

    pub fn starter() -> Self {
        Self {
            api_key: Some(PLACEHOLDER_API_KEY.to_string()),
            log_path: Some(default_log_path()),
            model: Some(default_model()),
            role: Some(starter_role()),
            ..Self::default()
        }
    }

    /// Create a starter file. Never overwrites an existing one.
    pub fn write_starter(path: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(&Self::starter())?;
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .and_then(|mut f| std::io::Write::write_all(&mut f, contents.as_bytes()))
            .with_context(|| format!("Failed to create config file: {}", path.display()))
    }
}
