use crate::application::checkout::Receipt;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReceiptFormat {
    #[default]
    Csv,
    Json,
}

/// Writes receipts to any `Write` sink as CSV rows or a JSON array.
pub struct ReceiptWriter<W: Write> {
    sink: W,
    format: ReceiptFormat,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W, format: ReceiptFormat) -> Self {
        Self { sink, format }
    }

    pub fn write_receipts(&mut self, receipts: &[Receipt]) -> Result<()> {
        match self.format {
            ReceiptFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.sink);
                for receipt in receipts {
                    writer.serialize(receipt)?;
                }
                writer.flush()?;
            }
            ReceiptFormat::Json => {
                serde_json::to_writer_pretty(&mut self.sink, receipts)?;
                writeln!(self.sink)?;
            }
        }
        Ok(())
    }
}
