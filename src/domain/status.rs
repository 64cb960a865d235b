use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the money for a payment currently sits.
///
/// Exactly four labels are valid. Which moves between them are allowed is
/// decided by [`EscrowLifecycle`](super::lifecycle::EscrowLifecycle), not here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    HeldInEscrow,
    Released,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::HeldInEscrow,
        PaymentStatus::Released,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::HeldInEscrow => "held_in_escrow",
            PaymentStatus::Released => "released",
            PaymentStatus::Refunded => "refunded",
        }
    }

    /// No further status change is possible once the funds have left escrow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Released | PaymentStatus::Refunded)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PaymentError::ValidationError(format!("Unknown payment status {s:?}")))
    }
}
