use chrono::format::{Item, StrftimeItems};
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use weekplan_core::RenderOptions;
use weekplan_core::render::{DEFAULT_DATE_FORMAT, DEFAULT_TITLE};

const DEFAULT_CONFIG_PATH: &str = "weekplan.toml";
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub default_title: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            date_format: default_date_format(),
        }
    }
}

impl PageConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            default_title: self.default_title.to_owned(),
            date_format: self.date_format.to_owned(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (WEEKPLAN__PAGE__DATE_FORMAT, etc.)
    /// 2. Config file given by `--config`, `WEEKPLAN_CONFIG`, or ./weekplan.toml
    /// 3. Hardcoded defaults
    ///
    /// An explicitly named file must exist; the ./weekplan.toml fallback is
    /// optional.
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .set_default("page.default_title", default_title())?
            .set_default("page.date_format", default_date_format())?;

        match config_path.or_else(|| env::var("WEEKPLAN_CONFIG").ok()) {
            Some(path) => {
                builder = builder.add_source(File::with_name(&path).required(true));
            }
            None => {
                if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
                    builder = builder.add_source(File::with_name(DEFAULT_CONFIG_PATH));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("WEEKPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(format!(
                "Log format must be one of {:?}, got \"{}\"",
                LOG_FORMATS, self.logging.format
            ));
        }
        if self.page.date_format.trim().is_empty() {
            return Err("Date format must not be empty".to_string());
        }
        if StrftimeItems::new(&self.page.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!(
                "Date format \"{}\" is not a valid strftime pattern",
                self.page.date_format
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn test_validation_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_unknown_log_format() {
        let config = Config {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "xml".to_string(),
            },
            page: PageConfig::default(),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_date_format() {
        let config = Config {
            logging: LoggingConfig::default(),
            page: PageConfig {
                default_title: "Dinners".to_string(),
                date_format: "  ".to_string(),
            },
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_date_format() {
        let config = Config {
            logging: LoggingConfig::default(),
            page: PageConfig {
                default_title: "Dinners".to_string(),
                date_format: "%Q".to_string(),
            },
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_keeps_defaults_for_missing_keys() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.child("weekplan.toml");
        std::fs::write(&path, "[page]\ndate_format = \"%d.%m.%Y\"\n")?;

        let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

        assert_eq!(config.page.date_format, "%d.%m.%Y");
        assert_eq!(config.page.default_title, DEFAULT_TITLE);
        assert_eq!(config.logging.format, "pretty");

        Ok(())
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = Config::load(Some("/nonexistent/weekplan.toml".to_string()));

        assert!(result.is_err());
    }

    #[test]
    fn test_render_options_from_page_config() {
        let page = PageConfig {
            default_title: "Dinners".to_string(),
            date_format: "%A".to_string(),
        };

        let options = page.render_options();
        assert_eq!(options.default_title, "Dinners");
        assert_eq!(options.date_format, "%A");
    }
}
