use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use lectio_shared::TestamentScope;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults used when the command line does not say otherwise.
#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    #[serde(default = "default_duration_months")]
    pub duration_months: f64,
    #[serde(default = "default_testament")]
    pub testament: String,
    #[serde(default = "default_include_weekends")]
    pub include_weekends: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            duration_months: default_duration_months(),
            testament: default_testament(),
            include_weekends: default_include_weekends(),
        }
    }
}

fn default_duration_months() -> f64 {
    12.0
}

fn default_testament() -> String {
    "BOTH".to_string()
}

fn default_include_weekends() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
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
    /// 1. Environment variables (LECTIO__PLAN__DURATION_MONTHS, etc.)
    /// 2. Config file specified by path, CONFIG_PATH, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("plan.duration_months", default_duration_months())?
            .set_default("plan.testament", default_testament())?
            .set_default("plan.include_weekends", default_include_weekends())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("LECTIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1.0..=120.0).contains(&self.plan.duration_months) {
            return Err(format!(
                "Plan duration must be between 1 and 120 months, got {}",
                self.plan.duration_months
            ));
        }
        if let Err(e) = TestamentScope::parse(&self.plan.testament) {
            return Err(e.to_string());
        }
        if self.logging.level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }

    pub fn testament(&self) -> lectio_shared::Result<TestamentScope> {
        TestamentScope::parse(&self.plan.testament)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(duration_months: f64, testament: &str) -> Config {
        Config {
            plan: PlanConfig {
                duration_months,
                testament: testament.to_string(),
                include_weekends: true,
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config(12.0, "BOTH").validate().is_ok());
        assert!(config(1.0, "ot").validate().is_ok());
        assert!(config(120.0, "NT").validate().is_ok());
    }

    #[test]
    fn test_validation_duration_out_of_range() {
        assert!(config(0.0, "BOTH").validate().is_err());
        assert!(config(121.0, "BOTH").validate().is_err());
        assert!(config(f64::NAN, "BOTH").validate().is_err());
    }

    #[test]
    fn test_validation_unknown_testament() {
        let err = config(12.0, "gospels").validate().unwrap_err();
        assert!(err.contains("gospels"));
    }

    #[test]
    fn test_validation_empty_log_level() {
        let mut config = config(12.0, "BOTH");
        config.logging.level = " ".to_string();
        assert!(config.validate().is_err());
    }
}
