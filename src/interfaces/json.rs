use crate::domain::payment::PaymentRecord;
use crate::error::Result;
use crate::interfaces::csv::breakdown_writer::BreakdownRow;
use std::io::Write;

/// Writes payment breakdowns as a pretty-printed JSON array.
///
/// Objects carry the same fields as the CSV rows. Decimals are emitted as
/// strings so no precision is lost.
pub fn write_breakdowns<'a, W, I>(sink: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a PaymentRecord>,
{
    let rows: Vec<BreakdownRow> = records.into_iter().map(BreakdownRow::from).collect();
    serde_json::to_writer_pretty(sink, &rows)?;
    Ok(())
}
