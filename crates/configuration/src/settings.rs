use core_types::{PREFERENTIAL_TARIFF_RATE, STANDARD_TARIFF_RATE};
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an empty or missing `config.toml` is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tariff: TariffSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Which side of the sugar import quota a cargo falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TariffRegime {
    /// In-quota imports.
    #[default]
    Preferential,
    /// Out-of-quota imports.
    Standard,
}

/// Tariff rates injected into the import-cost estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffSettings {
    /// 0.15 corresponds to 15%.
    #[serde(default = "default_preferential_rate")]
    pub preferential_rate: f64,
    #[serde(default = "default_standard_rate")]
    pub standard_rate: f64,
    #[serde(default)]
    pub default_regime: TariffRegime,
}

impl TariffSettings {
    pub fn rate_for(&self, regime: TariffRegime) -> f64 {
        match regime {
            TariffRegime::Preferential => self.preferential_rate,
            TariffRegime::Standard => self.standard_rate,
        }
    }
}

/// Controls how much history the reports consider.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// Number of most recent trading days fed to the analytics engine.
    #[serde(default = "default_history_days")]
    pub history_days: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, logs go to a daily-rolling file in this directory instead of stderr.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_preferential_rate() -> f64 {
    PREFERENTIAL_TARIFF_RATE
}

fn default_standard_rate() -> f64 {
    STANDARD_TARIFF_RATE
}

fn default_history_days() -> usize {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TariffSettings {
    fn default() -> Self {
        Self {
            preferential_rate: default_preferential_rate(),
            standard_rate: default_standard_rate(),
            default_regime: TariffRegime::default(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            history_days: default_history_days(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}
