use super::status::PaymentStatus;

/// Allowed moves between escrow states.
///
/// `pending -> held_in_escrow -> released`, with `held_in_escrow -> refunded`
/// as the only other edge. Released funds are with the technician already and
/// cannot be refunded from here.
const ALLOWED_TRANSITIONS: [(PaymentStatus, PaymentStatus); 3] = [
    (PaymentStatus::Pending, PaymentStatus::HeldInEscrow),
    (PaymentStatus::HeldInEscrow, PaymentStatus::Released),
    (PaymentStatus::HeldInEscrow, PaymentStatus::Refunded),
];

/// Finite-state machine over [`PaymentStatus`].
pub struct EscrowLifecycle;

impl EscrowLifecycle {
    pub fn can_transition(from: PaymentStatus, to: PaymentStatus) -> bool {
        ALLOWED_TRANSITIONS.contains(&(from, to))
    }

    /// Returns the new status, or `None` if the move is not allowed.
    pub fn transition(from: PaymentStatus, to: PaymentStatus) -> Option<PaymentStatus> {
        Self::can_transition(from, to).then_some(to)
    }
}
