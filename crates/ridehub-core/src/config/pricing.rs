//! Fare pricing-policy configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fare pricing-policy inputs.
///
/// Taxes and service fee are fixed rates applied to the base fare
/// (per-seat price × seat count). These are policy inputs, not part of
/// the hold/booking core's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied to the base fare.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Service-fee rate applied to the base fare.
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            service_fee_rate: default_service_fee_rate(),
        }
    }
}

fn default_tax_rate() -> Decimal {
    // 18% tax
    Decimal::new(18, 2)
}

fn default_service_fee_rate() -> Decimal {
    // 5% service fee
    Decimal::new(5, 2)
}
