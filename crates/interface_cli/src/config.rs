//! CLI configuration

use serde::Deserialize;

use core_kernel::Currency;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable itemized report
    Text,
    /// Machine-readable JSON document
    Json,
}

/// Rating CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RatingConfig {
    /// Currency the rate table is denominated in
    pub currency: Currency,
    /// Log level
    pub log_level: String,
    /// Default report format
    pub output: OutputFormat,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            log_level: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl RatingConfig {
    /// Loads configuration from `RATING_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix("RATING"))
    }

    /// Loads configuration from an environment source, applying defaults
    /// for anything it does not set
    pub fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("currency", defaults.currency.code())?
            .set_default("log_level", defaults.log_level)?
            .set_default("output", "text")?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
