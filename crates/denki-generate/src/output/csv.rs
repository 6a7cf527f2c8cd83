use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use denki_core::{DATE_FORMAT, HEADER, InventoryRecord};

/// Write records as CSV under the fixed inventory header.
///
/// The header line is bare; in data rows every non-numeric field is quoted.
/// Returns the number of bytes written.
pub fn write_inventory_csv(path: &Path, records: &[InventoryRecord]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let mut counting = CountingWriter::new(writer);
    counting.write_all(HEADER.join(",").as_bytes())?;
    counting.write_all(b"\n")?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::NonNumeric)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(counting);

    for record in records {
        writer.write_record(record_fields(record))?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

/// Field values of one record in header order.
pub fn record_fields(record: &InventoryRecord) -> [String; 24] {
    [
        record.sequence.to_string(),
        record.product_name.clone(),
        record.model_number.clone(),
        record.category.clone(),
        record.manufacturer.clone(),
        record.price.to_string(),
        record.size.to_string(),
        record.size_unit.clone(),
        record.color.clone(),
        record.feature.clone(),
        record.series.clone(),
        record.current_stock.to_string(),
        record.incoming_quantity.to_string(),
        record.incoming_date.format(DATE_FORMAT).to_string(),
        record.outgoing_quantity.to_string(),
        record
            .outgoing_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        record.stock_status.label().to_string(),
        record.warehouse_code.clone(),
        u8::from(record.order_flag).to_string(),
        record.order_status.clone(),
        record.rating.to_string(),
        record.release_date.format(DATE_FORMAT).to_string(),
        record.warranty_years.to_string(),
        record.energy_rating.clone(),
    ]
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
