use crate::error::PaymentError;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Share of every service amount retained by the marketplace.
pub const PLATFORM_FEE_PERCENTAGE: Decimal = dec!(0.15);

/// A non-negative price for a service, in major currency units.
///
/// Wraps `rust_decimal::Decimal`, so the value is always finite. Negative
/// amounts, NaN and infinities are rejected at construction instead of
/// flowing into the fee arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ServiceAmount(Decimal);

impl ServiceAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(PaymentError::ValidationError(format!(
                "Service amount must not be negative, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for ServiceAmount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for ServiceAmount {
    type Error = PaymentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(PaymentError::ValidationError(format!(
                "Service amount must be a finite number, got {value}"
            )));
        }
        let decimal = Decimal::from_f64(value).ok_or_else(|| {
            PaymentError::ValidationError(format!("Service amount {value} is out of range"))
        })?;
        Self::new(decimal)
    }
}

impl FromStr for ServiceAmount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim()).map_err(|e| {
            PaymentError::ValidationError(format!("Service amount {s:?} is not a number: {e}"))
        })?;
        Self::new(decimal)
    }
}

impl From<ServiceAmount> for Decimal {
    fn from(amount: ServiceAmount) -> Self {
        amount.0
    }
}

/// Commission rate taken by the platform, a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct FeeRate(Decimal);

impl FeeRate {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            Err(PaymentError::ValidationError(format!(
                "Fee rate must be between 0 and 1, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self(PLATFORM_FEE_PERCENTAGE)
    }
}

impl TryFrom<Decimal> for FeeRate {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeeRate> for Decimal {
    fn from(rate: FeeRate) -> Self {
        rate.0
    }
}
