//! Landed-cost estimate for imported raw sugar.

pub use core_types::{PREFERENTIAL_TARIFF_RATE, STANDARD_TARIFF_RATE};
use serde::{Deserialize, Serialize};

/// Converts an ICE No.11 quote in US cents/lb into USD/ton, before FX.
pub const CENTS_PER_LB_TO_TON: f64 = 22.0462;

/// Estimates the import cost of raw sugar in 元/吨.
///
/// `tariff_rate` is applied as given, without range checks.
pub fn estimate_import_cost(ice_price: f64, usd_cny_rate: f64, bdi_index: f64, tariff_rate: f64) -> f64 {
    let base_price = ice_price * usd_cny_rate * CENTS_PER_LB_TO_TON;
    let tariff = base_price * tariff_rate;
    base_price + tariff + freight_cost(bdi_index)
}

/// Linear freight proxy derived from the Baltic Dry Index.
pub fn freight_cost(bdi_index: f64) -> f64 {
    bdi_index / 10.0 + 200.0
}

/// The same cargo costed under both tariff regimes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeCosts {
    pub preferential: f64,
    pub standard: f64,
}

impl RegimeCosts {
    /// Extra cost of importing outside the quota.
    pub fn quota_premium(&self) -> f64 {
        self.standard - self.preferential
    }
}

pub fn import_cost_by_regime(
    ice_price: f64,
    usd_cny_rate: f64,
    bdi_index: f64,
    preferential_rate: f64,
    standard_rate: f64,
) -> RegimeCosts {
    RegimeCosts {
        preferential: estimate_import_cost(ice_price, usd_cny_rate, bdi_index, preferential_rate),
        standard: estimate_import_cost(ice_price, usd_cny_rate, bdi_index, standard_rate),
    }
}
