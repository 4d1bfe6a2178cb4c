//! Server configuration: defaults, optional TOML file, CLI overrides.

use clap::Parser;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the puzzle server.
///
/// Values resolve in three layers: built-in defaults, then an optional
/// TOML file, then command-line overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding maze `.txt` files, addressed by file name.
    #[serde(default = "default_mazes_dir")]
    pub mazes_dir: PathBuf,

    /// Directory rendered PNGs are written to and served from.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    10000
}

fn default_mazes_dir() -> PathBuf {
    PathBuf::from("mazes")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mazes_dir: default_mazes_dir(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Command-line interface for the puzzle server.
#[derive(Debug, Parser)]
#[command(name = "parlor_server", version, about = "Maze search and tic-tac-toe over HTTP")]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind (overrides the config file).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides the config file).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Maze directory (overrides the config file).
    #[arg(long)]
    pub mazes_dir: Option<PathBuf>,

    /// Static output directory (overrides the config file).
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Cli {
    /// Resolves the effective configuration from all three layers.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(mazes_dir) = &self.mazes_dir {
            config.mazes_dir = mazes_dir.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        Ok(config)
    }
}
