use crate::error::ConfigError;
use crate::settings::Config;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{LoggingSettings, ReportSettings, TariffRegime, TariffSettings};

/// Prefix for environment overrides, e.g. `SUGAR__TARIFF__STANDARD_RATE=0.5`.
pub const ENV_PREFIX: &str = "SUGAR";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file at `path`
/// (or an optional `config.toml` in the working directory when `path` is
/// `None`), then `SUGAR__*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    for (name, rate) in [
        ("tariff.preferential_rate", config.tariff.preferential_rate),
        ("tariff.standard_rate", config.tariff.standard_rate),
    ] {
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::InvalidField {
                field: name,
                reason: format!("expected a non-negative tariff rate, got {rate}"),
            });
        }
    }

    if config.report.history_days == 0 {
        return Err(ConfigError::InvalidField {
            field: "report.history_days",
            reason: "at least one trading day is required".to_string(),
        });
    }

    Ok(())
}
