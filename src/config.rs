//! Configuration management for todolist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DATABASE_FILE_NAME, DEFAULT_BIND_ADDRESS, DEFAULT_LIMIT,
    DEFAULT_PORT, IN_MEMORY_DATABASE_URL, LOCAL_CONFIG_FILE_NAME, PAGE_SIZE_MAX, PAGE_SIZE_MIN,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_address: String,
    /// TCP port to listen on
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
    /// Ignore `url` and keep everything in memory (lost on exit)
    pub in_memory: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Items shown per page on the index
    pub page_size: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// One of: error, warn, info, debug, trace
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let url = Config::get_data_dir()
            .map(|dir| format!("sqlite://{}?mode=rwc", dir.join(DATABASE_FILE_NAME).display()))
            .unwrap_or_else(|_| IN_MEMORY_DATABASE_URL.to_string());

        Self { url, in_memory: false }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_LIMIT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// The URL actually used to connect, honoring `in_memory`
    pub fn effective_url(&self) -> &str {
        if self.in_memory {
            IN_MEMORY_DATABASE_URL
        } else {
            &self.url
        }
    }
}

impl LoggingConfig {
    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.bind_address.trim().is_empty() {
            anyhow::bail!("bind_address cannot be empty");
        }
        self.socket_addr()?;

        if !self.database.in_memory && self.database.url.trim().is_empty() {
            anyhow::bail!("database url cannot be empty unless in_memory is set");
        }

        if self.display.page_size < PAGE_SIZE_MIN || self.display.page_size > PAGE_SIZE_MAX {
            anyhow::bail!(
                "page_size must be between {} and {}, got {}",
                PAGE_SIZE_MIN,
                PAGE_SIZE_MAX,
                self.display.page_size
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.bind_address, self.server.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid server address '{}:{}'",
                    self.server.bind_address, self.server.port
                )
            })
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# todolist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Directory for the database and log file
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }
}
