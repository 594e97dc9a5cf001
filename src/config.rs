use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;

use chrono_tz::Tz;
use thiserror::Error;

use crate::clients::schedule_client::DEFAULT_SCHEDULE_URL;

const DEFAULT_RUN_MODE: &str = "cli";
const DEFAULT_TIMEZONE: &str = "America/New_York";
const DEFAULT_API_ADDR: &str = "127.0.0.1:3030";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config line {line}: {content}")]
    InvalidLine { line: usize, content: String },
    #[error("unknown timezone {0}")]
    Timezone(String),
    #[error("invalid run mode {0}")]
    RunMode(String),
    #[error("invalid API_ADDR {0}")]
    Address(String),
}

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ConfigError::InvalidLine {
                    line: idx + 1,
                    content: line.to_string(),
                });
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Api,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub run_mode: RunMode,
    pub schedule_url: String,
    pub timezone: Tz,
    pub api_addr: SocketAddr,
}

impl Settings {
    /// Resolve settings from `lookup`, which the binary backs with the
    /// config file first and the process environment second.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let run_mode = match lookup("RUN_MODE")
            .unwrap_or(DEFAULT_RUN_MODE.to_string())
            .as_str()
        {
            "cli" => RunMode::Cli,
            "api" => RunMode::Api,
            other => return Err(ConfigError::RunMode(other.to_string())),
        };
        let schedule_url = lookup("SCHEDULE_URL").unwrap_or(DEFAULT_SCHEDULE_URL.to_string());
        let tz_name = lookup("DISPLAY_TIMEZONE").unwrap_or(DEFAULT_TIMEZONE.to_string());
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| ConfigError::Timezone(tz_name.clone()))?;
        let addr = lookup("API_ADDR").unwrap_or(DEFAULT_API_ADDR.to_string());
        let api_addr: SocketAddr = addr
            .parse()
            .map_err(|_| ConfigError::Address(addr.clone()))?;

        Ok(Self {
            run_mode,
            schedule_url,
            timezone,
            api_addr,
        })
    }
}

/// Settings for the binary: values from `config_file` (when one is named)
/// win over `env_lookup`. A named file that cannot be read or parsed is an
/// error.
pub fn load_settings<F>(config_file: Option<&str>, env_lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    Settings::resolve(|key| config.get(key).or_else(|| env_lookup(key)))
}
