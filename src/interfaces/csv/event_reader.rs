use crate::domain::payment::PaymentEvent;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads payment events from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<PaymentEvent>`.
/// Whitespace is trimmed and rows may omit the trailing `amount` column.
pub struct PaymentEventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentEventReader<R> {
    /// Creates a new `PaymentEventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<PaymentEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
