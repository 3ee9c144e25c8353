//! Centralized configuration management for contact-form

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Terminal UI configuration
    pub ui: UiConfig,
}

/// Log file location
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`
    pub log_file: String,
}

/// Terminal UI options
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Show the instructions block under the form
    pub show_instructions: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            log_file: "contact_form.log".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_instructions: true,
        }
    }
}

impl UiConfig {
    /// Read `show_instructions` from `var_name`, defaulting to shown
    fn from_env_var(var_name: &str) -> Result<Self> {
        Ok(Self {
            show_instructions: parse_env_var(var_name)?.unwrap_or(true),
        })
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let defaults = LoggingConfig::default();

        let logging = LoggingConfig {
            log_dir: std::env::var("CONTACT_FORM_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file: std::env::var("CONTACT_FORM_LOG_FILE").unwrap_or(defaults.log_file),
        };

        let ui = UiConfig::from_env_var("CONTACT_FORM_SHOW_INSTRUCTIONS")?;

        Ok(Config { logging, ui })
    }

    /// Full path of the log file
    pub fn log_path(&self) -> PathBuf {
        self.logging.log_dir.join(&self.logging.log_file)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.logging.log_file.trim().is_empty() {
            return Err(anyhow::anyhow!("Log file name must not be empty"));
        }

        std::fs::create_dir_all(&self.logging.log_dir).with_context(|| {
            format!("Cannot create log directory: {}", self.logging.log_dir.display())
        })?;

        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.log_path(), PathBuf::from("./contact_form.log"));
        assert!(config.ui.show_instructions);
    }

    #[test]
    fn test_config_validation_creates_log_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.logging.log_dir = temp.path().join("logs").join("nested");

        config.validate().unwrap();
        assert!(config.logging.log_dir.is_dir());
    }

    #[test]
    fn test_config_validation_rejects_empty_file_name() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.logging.log_dir = temp.path().to_path_buf();
        config.logging.log_file = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_env_var_unset_and_invalid() {
        let missing: Option<bool> = parse_env_var("CONTACT_FORM_TEST_SURELY_UNSET").unwrap();
        assert_eq!(missing, None);

        std::env::set_var("CONTACT_FORM_TEST_BAD_BOOL", "maybe");
        let err = parse_env_var::<bool>("CONTACT_FORM_TEST_BAD_BOOL").unwrap_err();
        assert!(err.to_string().contains("CONTACT_FORM_TEST_BAD_BOOL"));
        std::env::remove_var("CONTACT_FORM_TEST_BAD_BOOL");
    }

    #[test]
    fn test_ui_config_from_env_var() {
        let var = "CONTACT_FORM_TEST_SHOW_INSTRUCTIONS";
        assert!(UiConfig::from_env_var(var).unwrap().show_instructions);

        std::env::set_var(var, "false");
        assert!(!UiConfig::from_env_var(var).unwrap().show_instructions);

        std::env::set_var(var, "sometimes");
        let err = UiConfig::from_env_var(var).unwrap_err();
        assert!(err.to_string().contains(var));
        std::env::remove_var(var);
    }
}
