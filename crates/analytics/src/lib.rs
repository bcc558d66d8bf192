//! # Sugar Monitor Analytics Engine
//!
//! The quantitative core behind the sugar import dashboard: landed-cost
//! estimation, Pearson correlation, least-squares regression and arbitrage
//! classification over daily market observations.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It performs no I/O and reads
//!   no configuration. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every function is a pure transform of its
//!   arguments. Degenerate input (empty or mismatched series, zero variance,
//!   zero base) produces a fixed fallback value instead of an error, so callers
//!   can always render something.
//!
//! ## Public API
//!
//! - The free functions re-exported below, one per calculation.
//! - `AnalyticsEngine`: composes them into the market, arbitrage and macro views.

pub mod arbitrage;
pub mod correlation;
pub mod engine;
pub mod import_cost;
pub mod metrics;
pub mod normalize;
pub mod regression;
pub mod report;
pub mod series;

// Re-export the key components to create a clean, public-facing API.
pub use arbitrage::{ArbitrageStatus, ProfitDistribution, arbitrage_profit, arbitrage_status, summarize_profits};
pub use correlation::{CorrelationResult, classify_correlation, pearson_correlation};
pub use engine::AnalyticsEngine;
pub use import_cost::{
    CENTS_PER_LB_TO_TON, PREFERENTIAL_TARIFF_RATE, RegimeCosts, STANDARD_TARIFF_RATE, estimate_import_cost,
    freight_cost, import_cost_by_regime,
};
pub use metrics::{build_metric_cards, percent_change};
pub use normalize::normalize;
pub use regression::{LinearModel, fit_linear};
pub use report::{ArbitrageReport, DailyArbitrage, DriverAnalysis, MacroReport};
pub use series::{ObservationSeries, latest};
