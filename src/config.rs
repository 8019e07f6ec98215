// src/config.rs

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("No project source configured: set PROJECTS_FILE or PROJECTS_SHEET_ID")]
    NoSource,
    #[error("PROJECTS_SHEET_ID is set but GOOGLE_API_KEY is missing")]
    MissingApiKey,
}

/// Where the project rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    /// A JSON file in the Sheets API `ValueRange` shape.
    File(PathBuf),
    GoogleSheet {
        sheet_id: String,
        range: String,
        api_key: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub static_dir: PathBuf,
    pub source: SheetSource,
    pub fetch_timeout: Duration,
}

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_SHEET_RANGE: &str = "Projects";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let addr_raw = get("PROJECTS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PROJECTS_ADDR",
            value: addr_raw.clone(),
        })?;

        let max_workers = match get("PROJECTS_MAX_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "PROJECTS_MAX_WORKERS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_WORKERS,
        };

        let fetch_timeout = match get("PROJECTS_FETCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    name: "PROJECTS_FETCH_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let static_dir = get("PROJECTS_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        // A local file wins over the sheet, so development never needs an API key.
        let source = if let Some(path) = get("PROJECTS_FILE") {
            SheetSource::File(PathBuf::from(path))
        } else if let Some(sheet_id) = get("PROJECTS_SHEET_ID") {
            SheetSource::GoogleSheet {
                sheet_id,
                range: get("PROJECTS_SHEET_RANGE")
                    .unwrap_or_else(|| DEFAULT_SHEET_RANGE.to_string()),
                api_key: get("GOOGLE_API_KEY").ok_or(ConfigError::MissingApiKey)?,
            }
        } else {
            return Err(ConfigError::NoSource);
        };

        Ok(Self {
            addr,
            max_workers,
            static_dir,
            source,
            fetch_timeout,
        })
    }
}
