//! Fare breakdown computation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Price breakdown for a booking or a pre-booking preview.
///
/// Base fare is the flat per-seat price times the seat count; taxes and
/// service fee are fixed rates of the base fare, rounded half-up to two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBreakdown {
    /// Per-seat price × seat count.
    pub base_fare: Decimal,
    /// Taxes on the base fare.
    pub taxes: Decimal,
    /// Service fee on the base fare.
    pub service_fee: Decimal,
    /// Base fare + taxes + service fee.
    pub total: Decimal,
    /// Number of seats priced.
    pub seat_count: u32,
}

impl FareBreakdown {
    /// Compute the breakdown for `seat_count` seats at `price_per_seat`.
    pub fn compute(
        price_per_seat: Decimal,
        seat_count: u32,
        tax_rate: Decimal,
        service_fee_rate: Decimal,
    ) -> Self {
        let base_fare = price_per_seat * Decimal::from(seat_count);
        let taxes = round2(base_fare * tax_rate);
        let service_fee = round2(base_fare * service_fee_rate);
        let total = base_fare + taxes + service_fee;

        Self {
            base_fare,
            taxes,
            service_fee,
            total,
            seat_count,
        }
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
