use crate::domain::breakdown::BreakdownCalculator;
use crate::domain::lifecycle::EscrowLifecycle;
use crate::domain::money::ServiceAmount;
use crate::domain::payment::{EventType, PaymentEvent, PaymentRecord};
use crate::domain::ports::PaymentStoreBox;
use crate::domain::status::PaymentStatus;
use crate::error::{PaymentError, Result};

/// Applies payment events to stored payment records.
///
/// `EscrowEngine` owns the storage backend and the breakdown calculator. Each
/// event is fully applied, storage included, before `process_event` returns,
/// so events are handled strictly in submission order.
pub struct EscrowEngine {
    payment_store: PaymentStoreBox,
    calculator: BreakdownCalculator,
}

impl EscrowEngine {
    /// Creates a new `EscrowEngine`.
    ///
    /// # Arguments
    ///
    /// * `payment_store` - The store for payment records.
    /// * `calculator` - Splits each new payment into platform fee and payout.
    pub fn new(payment_store: PaymentStoreBox, calculator: BreakdownCalculator) -> Self {
        Self {
            payment_store,
            calculator,
        }
    }

    /// Applies a single event.
    ///
    /// Rejected events leave the store untouched and are reported as errors;
    /// the engine stays usable afterwards.
    pub async fn process_event(&self, event: PaymentEvent) -> Result<()> {
        match event.r#type.target_status() {
            None => self.create(event).await,
            Some(target) => self.advance(event.payment, target).await,
        }
    }

    async fn create(&self, event: PaymentEvent) -> Result<()> {
        let amount = event.amount.ok_or_else(|| {
            PaymentError::ValidationError(format!(
                "Payment {} is missing an amount",
                event.payment
            ))
        })?;
        let amount = ServiceAmount::new(amount)?;

        if self.payment_store.get(event.payment).await?.is_some() {
            return Err(PaymentError::DuplicatePayment(event.payment));
        }

        let breakdown = self.calculator.compute(amount);
        tracing::debug!(
            payment = event.payment,
            amount = %breakdown.amount,
            platform_fee = %breakdown.platform_fee,
            technician_payout = %breakdown.technician_payout,
            "payment created"
        );

        self.payment_store
            .store(PaymentRecord {
                payment: event.payment,
                status: PaymentStatus::Pending,
                breakdown,
            })
            .await
    }

    async fn advance(&self, payment: u32, target: PaymentStatus) -> Result<()> {
        let mut record = self
            .payment_store
            .get(payment)
            .await?
            .ok_or(PaymentError::UnknownPayment(payment))?;

        let from = record.status;
        record.status =
            EscrowLifecycle::transition(from, target).ok_or(PaymentError::InvalidTransition {
                payment,
                from,
                to: target,
            })?;

        tracing::debug!(payment, %from, to = %target, "payment status changed");
        self.payment_store.store(record).await
    }

    /// Consumes the engine and returns every payment, ordered by id.
    pub async fn into_results(self) -> Result<Vec<PaymentRecord>> {
        let mut records = self.payment_store.get_all().await?;
        records.sort_by_key(|record| record.payment);
        Ok(records)
    }
}
