use super::payment::PaymentRecord;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn store(&self, record: PaymentRecord) -> Result<()>;
    async fn get(&self, payment: u32) -> Result<Option<PaymentRecord>>;
    async fn get_all(&self) -> Result<Vec<PaymentRecord>>;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
