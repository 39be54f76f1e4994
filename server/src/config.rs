use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Address to bind, without the port
    pub listen_addr: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    /// Populate the store with sample todos before serving
    pub seed_demo_data: bool,
}

impl Config {
    /// Built-in defaults only.
    pub fn defaults() -> Result<Self> {
        ConfigBuilder::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .context("Failed to build default configuration")?
            .try_deserialize()
            .context("Failed to deserialize default configuration")
    }

    /// Defaults, then an optional TOML file, then `TODO_*` environment
    /// variables (`TODO_SERVER__PORT=8080`).
    pub fn load(config_file: Option<&str>) -> Result<Self> {
        let mut builder =
            ConfigBuilder::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("TODO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.listen_addr, self.server.port)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ));
            }
        }

        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.server.listen_addr.trim().is_empty() {
            return Err(anyhow::anyhow!("Server listen_addr cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::defaults().unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.store.seed_demo_data);
        assert!(config.validate().is_ok());
        assert_eq!(config.server_address(), "127.0.0.1:3000");
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let mut config = Config::defaults().unwrap();
        config.logging.level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn validate_rejects_port_zero() {
        let mut config = Config::defaults().unwrap();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_layers_file_then_environment_over_defaults() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 8081").unwrap();
        let path = file.path().to_str().unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.listen_addr, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
        assert!(config.store.seed_demo_data);

        std::env::set_var("TODO_LOGGING__LEVEL", "debug");
        let config = Config::load(Some(path));
        std::env::remove_var("TODO_LOGGING__LEVEL");
        let config = config.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn load_fails_for_missing_file() {
        assert!(Config::load(Some("/nonexistent/todo-server.toml")).is_err());
    }

    #[test]
    fn log_format_parses_lowercase() {
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
