//! Price derivation from raw tariff components.
//!
//! Every resolved offer gets its prices from these functions, so the
//! rounding rule is the same wherever an offer is shown.

use crate::config::ANNUAL_CONSUMPTION_KWH;

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Yearly subscription plus the cost of [`ANNUAL_CONSUMPTION_KWH`] kWh.
pub fn annual_price(consumption_pricing: f64, subscription_cost: f64) -> f64 {
    round2(subscription_cost + consumption_pricing * ANNUAL_CONSUMPTION_KWH)
}

/// Derived from the already-rounded annual price, not from the raw inputs.
pub fn monthly_price(annual_price: f64) -> f64 {
    round2(annual_price / 12.0)
}
