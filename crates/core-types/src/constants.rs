/// In-quota tariff rate on raw sugar imports.
pub const PREFERENTIAL_TARIFF_RATE: f64 = 0.15;

/// Out-of-quota tariff rate on raw sugar imports.
pub const STANDARD_TARIFF_RATE: f64 = 0.50;
