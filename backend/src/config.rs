//! Application configuration.
//!
//! Settings come from `player-summary.toml` and may be overridden by
//! environment variables:
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [court]
//! pixels_per_foot = 10.0
//!
//! [data]
//! directory = "raw_data"
//! ```
//!
//! # Environment Variables
//! - `HOST`: server host
//! - `PORT`: server port
//! - `PIXELS_PER_FOOT`: court diagram scale
//! - `DATA_DIR`: dataset directory imported at startup

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{CourtScale, ScaleError, DEFAULT_PIXELS_PER_FOOT};

pub const CONFIG_FILE: &str = "player-summary.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{name} must be {expected}, got '{value}'")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid court scale: {0}")]
    Scale(#[from] ScaleError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub court: CourtSettings,
    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtSettings {
    #[serde(default = "default_pixels_per_foot")]
    pub pixels_per_foot: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Dataset imported at startup; nothing is loaded when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_pixels_per_foot() -> f64 {
    DEFAULT_PIXELS_PER_FOOT
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CourtSettings {
    fn default() -> Self {
        Self {
            pixels_per_foot: default_pixels_per_foot(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.court_scale()?;
        Ok(config)
    }

    /// Load configuration from the first `player-summary.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Self::search(Path::new("."))
    }

    /// Same search as [`from_default_location`](Self::from_default_location),
    /// relative to `base`.
    pub fn search(base: &Path) -> Result<Self, ConfigError> {
        let candidates = [
            base.join(CONFIG_FILE),
            base.join("backend").join(CONFIG_FILE),
            base.join("..").join(CONFIG_FILE),
        ];

        match candidates.iter().find(|path| path.exists()) {
            Some(path) => {
                log::info!("Using configuration from {}", path.display());
                Self::from_file(path)
            }
            None => {
                log::info!("No {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Apply `HOST`, `PORT`, `PIXELS_PER_FOOT` and `DATA_DIR` from the environment.
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PORT",
                value: port.clone(),
                expected: "a valid port number",
            })?;
        }
        if let Ok(ppf) = env::var("PIXELS_PER_FOOT") {
            self.court.pixels_per_foot = ppf.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PIXELS_PER_FOOT",
                value: ppf.clone(),
                expected: "a number",
            })?;
        }
        if let Ok(dir) = env::var("DATA_DIR") {
            self.data.directory = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }
        self.court_scale()?;
        Ok(self)
    }

    pub fn court_scale(&self) -> Result<CourtScale, ConfigError> {
        Ok(CourtScale::new(self.court.pixels_per_foot)?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
