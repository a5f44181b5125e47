use crate::domain::order::LineItem;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads `item,quantity,price` rows from a CSV source.
///
/// Wraps `csv::Reader` and yields one `Result<LineItem>` per row, trimming
/// whitespace around every field.
pub struct LineItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LineItemReader<R> {
    /// Creates a new `LineItemReader` from any `Read` source (e.g. stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes line items. Malformed rows surface as errors
    /// without ending the stream.
    pub fn line_items(self) -> impl Iterator<Item = Result<LineItem>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
