use crate::domain::payment::PaymentRecord;
use crate::domain::status::PaymentStatus;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Flat output row for one payment.
#[derive(Debug, Serialize, PartialEq)]
pub struct BreakdownRow {
    pub payment: u32,
    pub status: PaymentStatus,
    pub amount: Decimal,
    pub platform_fee: Decimal,
    pub technician_payout: Decimal,
}

impl From<&PaymentRecord> for BreakdownRow {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            payment: record.payment,
            status: record.status,
            amount: record.breakdown.amount,
            platform_fee: record.breakdown.platform_fee,
            technician_payout: record.breakdown.technician_payout,
        }
    }
}

/// Writes payment breakdowns as CSV with a header row.
pub struct BreakdownWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BreakdownWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_records<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a PaymentRecord>,
    {
        for record in records {
            self.writer.serialize(BreakdownRow::from(record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
