use super::breakdown::PaymentBreakdown;
use super::status::PaymentStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Create,
    Hold,
    Release,
    Refund,
}

impl EventType {
    /// The status an event moves an existing payment to. `Create` has none.
    pub fn target_status(&self) -> Option<PaymentStatus> {
        match self {
            EventType::Create => None,
            EventType::Hold => Some(PaymentStatus::HeldInEscrow),
            EventType::Release => Some(PaymentStatus::Released),
            EventType::Refund => Some(PaymentStatus::Refunded),
        }
    }
}

/// One input row: `type, payment, amount`.
///
/// `amount` is only read for `create`; it is left unvalidated here so a bad
/// amount is reported against the payment it belongs to.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentEvent {
    pub r#type: EventType,
    pub payment: u32,
    pub amount: Option<Decimal>,
}

/// A payment as tracked by the engine.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub payment: u32,
    pub status: PaymentStatus,
    pub breakdown: PaymentBreakdown,
}
