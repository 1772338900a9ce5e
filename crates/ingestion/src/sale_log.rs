//! CSV audit log of ingested sales.
//!
//! Write-only: one header row, then one row per sale as
//! `timestamp,productID,quantity,price`.

use sales_core::{Result, Sale};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

const HEADER: &str = "timestamp,productID,quantity,price";

/// CSV writer for sales.
pub struct SaleLog<W: Write> {
    writer: W,
    rows_written: u64,
}

impl SaleLog<BufWriter<File>> {
    /// Create (or truncate) a log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        info!(path = %path.display(), "sale log opened");
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> SaleLog<W> {
    /// Wrap a writer and emit the header row.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{HEADER}")?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Append one sale.
    pub fn append(&mut self, sale: &Sale) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{}",
            sale.event_time,
            escape_field(&sale.product_key),
            sale.quantity,
            sale.unit_price.into_inner()
        )?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Data rows written (header excluded).
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Quote a field containing a separator, quote or line break; double embedded quotes.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
