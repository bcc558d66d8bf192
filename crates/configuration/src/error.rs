use thiserror::Error;

/// Failures while assembling the settings from `config.toml` and `SUGAR__*` variables.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read, or a value did not fit its typed field.
    #[error("Failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid value for `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}
