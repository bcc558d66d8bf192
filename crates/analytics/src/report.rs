use crate::arbitrage::{ArbitrageStatus, ProfitDistribution};
use crate::correlation::CorrelationResult;
use crate::regression::LinearModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profit and window state for one trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyArbitrage {
    pub date: NaiveDate,
    pub domestic_price: f64,
    pub import_cost: f64,
    pub status: ArbitrageStatus,
}

/// Everything the arbitrage view shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageReport {
    /// Oldest first.
    pub days: Vec<DailyArbitrage>,
    pub latest: Option<ArbitrageStatus>,
    pub distribution: ProfitDistribution,
}

/// How sugar moves with a single macro driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverAnalysis {
    pub driver: String,
    pub correlation: CorrelationResult,
    /// Sugar close regressed on the driver.
    pub regression: LinearModel,
}

/// Everything the macro-driver view shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroReport {
    pub dates: Vec<NaiveDate>,
    pub drivers: Vec<DriverAnalysis>,
    /// Each series rebased to 100 at the first date.
    pub normalized_sugar: Vec<f64>,
    pub normalized_usd_cny: Vec<f64>,
    pub normalized_bdi: Vec<f64>,
}
