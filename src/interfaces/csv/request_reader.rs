use crate::application::checkout::ChargeRecord;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads charge records from a CSV source.
///
/// Expects the header `provider, amount, currency, description, customer_id`.
/// Whitespace is trimmed and short rows are accepted; blank optional cells
/// come through as `None`.
pub struct ChargeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ChargeReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes records; a malformed row yields an `Err` without
    /// ending the stream.
    pub fn records(self) -> impl Iterator<Item = Result<ChargeRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
