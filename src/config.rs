//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite catalog file
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Address the server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Remote catalog endpoint; when set, client commands read from it
    /// instead of the local database
    #[serde(default)]
    pub api_url: Option<String>,

    /// Timeout for remote catalog requests in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_database() -> PathBuf {
    PathBuf::from("products.db")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            host: default_host(),
            port: default_port(),
            api_url: None,
            timeout_secs: default_timeout_secs(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("price-compare").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(database) = std::env::var("PRICE_COMPARE_DB") {
            if !database.is_empty() {
                self.database = PathBuf::from(database);
            }
        }

        if let Ok(url) = std::env::var("PRICE_COMPARE_API_URL") {
            if !url.is_empty() {
                self.api_url = Some(url);
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }

        self
    }

    /// Returns `host:port` for binding the server.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database, PathBuf::from("products.db"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.api_url.is_none());
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "invalid".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
        assert!(err.contains("table, json, markdown, csv"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            database = "/var/lib/price-compare/products.db"
            host = "0.0.0.0"
            port = 8080
            api_url = "http://catalog.internal:5000"
            timeout_secs = 3
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.database, PathBuf::from("/var/lib/price-compare/products.db"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url.as_deref(), Some("http://catalog.internal:5000"));
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config: Config = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.database, PathBuf::from("products.db"));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            database = "catalog.db"
            format = "csv"
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.database, PathBuf::from("catalog.db"));
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = 7000").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_config_with_env() {
        let orig_db = std::env::var("PRICE_COMPARE_DB").ok();
        let orig_url = std::env::var("PRICE_COMPARE_API_URL").ok();
        let orig_port = std::env::var("PORT").ok();

        std::env::set_var("PRICE_COMPARE_DB", "/tmp/env.db");
        std::env::set_var("PRICE_COMPARE_API_URL", "http://localhost:5000");
        std::env::set_var("PORT", "not_a_port");

        let config = Config::new().with_env();
        assert_eq!(config.database, PathBuf::from("/tmp/env.db"));
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:5000"));
        // Invalid values are ignored
        assert_eq!(config.port, 5000);

        std::env::set_var("PORT", "6000");
        assert_eq!(Config::new().with_env().port, 6000);

        match orig_db {
            Some(v) => std::env::set_var("PRICE_COMPARE_DB", v),
            None => std::env::remove_var("PRICE_COMPARE_DB"),
        }
        match orig_url {
            Some(v) => std::env::set_var("PRICE_COMPARE_API_URL", v),
            None => std::env::remove_var("PRICE_COMPARE_API_URL"),
        }
        match orig_port {
            Some(v) => std::env::set_var("PORT", v),
            None => std::env::remove_var("PORT"),
        }
    }
}
