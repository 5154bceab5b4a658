use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SelectorConfig {
    /// Placed between dish names in the reply
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Seed for a reproducible random source; thread RNG when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            seed: None,
        }
    }
}

fn default_separator() -> String {
    whattoeat_recommend::DEFAULT_SEPARATOR.to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (WHATTOEAT__SELECTOR__SEED, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("selector.separator", default_separator())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", LogFormat::default().as_ref())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults apply
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WHATTOEAT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.selector.separator.is_empty() {
            return Err("Selector separator must not be empty".to_string());
        }
        if self.logging.level.trim().is_empty() {
            return Err("Logging level must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert_eq!(config.selector.separator, "、");
        assert_eq!(config.selector.seed, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_separator() {
        let config = Config {
            selector: SelectorConfig {
                separator: String::new(),
                seed: Some(1),
            },
            logging: LoggingConfig::default(),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_log_level() {
        let config = Config {
            selector: SelectorConfig::default(),
            logging: LoggingConfig {
                level: " ".to_string(),
                format: LogFormat::Json,
            },
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_strings() {
        assert_eq!(LogFormat::Json.as_ref(), "json");
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    }
}
