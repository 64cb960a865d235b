use super::money::{FeeRate, ServiceAmount};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept for the fee and the payout.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// How midpoints (`x.xx5`) are resolved when fees are rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// 0.045 becomes 0.05.
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: 0.045 becomes 0.04, 0.055 becomes 0.06.
    HalfEven,
}

impl From<Rounding> for RoundingStrategy {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// The split of a service amount between the platform and the technician.
///
/// Computed fresh on every call and never persisted by the calculator.
/// `amount` is kept as given, while `platform_fee` and `technician_payout`
/// are each rounded to cents independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub amount: Decimal,
    pub platform_fee: Decimal,
    pub technician_payout: Decimal,
}

/// Splits service amounts under a fixed commission rate.
///
/// The rate and rounding mode are fixed at construction and the calculator
/// holds no other state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BreakdownCalculator {
    fee_rate: FeeRate,
    rounding: Rounding,
}

impl BreakdownCalculator {
    pub fn new(fee_rate: FeeRate, rounding: Rounding) -> Self {
        Self { fee_rate, rounding }
    }

    pub fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Computes the platform fee and the technician payout for `amount`.
    pub fn compute(&self, amount: ServiceAmount) -> PaymentBreakdown {
        let amount = amount.value();
        let platform_fee = self.to_cents(amount * self.fee_rate.value());
        let technician_payout = self.to_cents(amount - platform_fee);

        PaymentBreakdown {
            amount,
            platform_fee,
            technician_payout,
        }
    }

    fn to_cents(&self, value: Decimal) -> Decimal {
        let mut rounded =
            value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, self.rounding.into());
        rounded.rescale(CURRENCY_DECIMAL_PLACES);
        rounded
    }
}

/// Breakdown under the default 15% commission, rounding half away from zero.
pub fn compute_breakdown(amount: ServiceAmount) -> PaymentBreakdown {
    BreakdownCalculator::default().compute(amount)
}
