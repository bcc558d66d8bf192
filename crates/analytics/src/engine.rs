use crate::arbitrage::{arbitrage_profit, arbitrage_status, summarize_profits};
use crate::correlation::{classify_correlation, pearson_correlation};
use crate::metrics::build_metric_cards;
use crate::normalize::normalize;
use crate::regression::fit_linear;
use crate::report::{ArbitrageReport, DailyArbitrage, DriverAnalysis, MacroReport};
use crate::series::{ObservationSeries, latest};
use core_types::{DailyObservation, MetricCard};

/// A stateless calculator that turns a window of daily observations into the
/// figures behind each dashboard view.
///
/// Nothing is cached between calls; every method recomputes from its input.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headline cards for the market overview.
    ///
    /// `history` must be newest first; the card changes compare against
    /// `history[1]`.
    pub fn market_overview(&self, history: &[DailyObservation]) -> Vec<MetricCard> {
        build_metric_cards(history.first(), history)
    }

    /// Daily profit of importing against the domestic close, plus the current
    /// window and the profit distribution over the whole window.
    pub fn arbitrage(&self, history: &[DailyObservation]) -> ArbitrageReport {
        let series = ObservationSeries::from_observations(history);

        let days: Vec<DailyArbitrage> = series
            .dates
            .iter()
            .zip(series.sugar_close.iter().zip(&series.import_cost))
            .map(|(&date, (&domestic_price, &import_cost))| DailyArbitrage {
                date,
                domestic_price,
                import_cost,
                status: arbitrage_status(arbitrage_profit(domestic_price, import_cost)),
            })
            .collect();

        let profits: Vec<f64> = days.iter().map(|day| day.status.profit).collect();
        let distribution = summarize_profits(&profits);

        let latest = latest(history)
            .map(|obs| arbitrage_status(arbitrage_profit(obs.sugar_close, obs.import_cost_estimate)));

        tracing::debug!(
            days = days.len(),
            profitable_days = distribution.profitable_days,
            "Arbitrage report computed."
        );

        ArbitrageReport {
            days,
            latest,
            distribution,
        }
    }

    /// Correlation and regression of the sugar close against the USD/CNY rate
    /// and the BDI, with every series rebased for comparison.
    pub fn macro_drivers(&self, history: &[DailyObservation]) -> MacroReport {
        let series = ObservationSeries::from_observations(history);

        let drivers: Vec<DriverAnalysis> = [("USD/CNY", &series.usd_cny_rate), ("BDI", &series.bdi_index)]
            .into_iter()
            .map(|(name, driver)| DriverAnalysis {
                driver: name.to_string(),
                correlation: classify_correlation(pearson_correlation(&series.sugar_close, driver)),
                regression: fit_linear(driver, &series.sugar_close),
            })
            .collect();

        MacroReport {
            normalized_sugar: normalize(&series.sugar_close),
            normalized_usd_cny: normalize(&series.usd_cny_rate),
            normalized_bdi: normalize(&series.bdi_index),
            dates: series.dates,
            drivers,
        }
    }
}
