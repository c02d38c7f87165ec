//! Buffered record writer.

use crate::delimited::render_csv;
use crate::error::WriterError;
use crate::format::OutputFormat;
use crate::json::render_json;
use crate::text::render_text;
use people_generator::{FieldSet, Person};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How records are laid out on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub format: OutputFormat,
    /// Field separator for CSV output, one or more characters
    pub delimiter: String,
    /// Emit a header row for CSV output
    pub header: bool,
    pub fields: FieldSet,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            delimiter: ",".to_string(),
            header: false,
            fields: FieldSet::default(),
        }
    }
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Bytes written, including the trailing newline.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Serializes a complete record set in one of the supported formats.
///
/// Output is rendered into memory first and written with a single call, so
/// a serialization failure never leaves partial output behind.
pub struct RecordWriter {
    options: WriteOptions,
}

impl RecordWriter {
    pub fn new(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Render all people into a buffer that ends with exactly one newline.
    pub fn render(&self, people: &[Person]) -> Result<Vec<u8>, WriterError> {
        let mut buf = match self.options.format {
            OutputFormat::Csv => render_csv(
                people,
                self.options.fields,
                &self.options.delimiter,
                self.options.header,
            )?,
            OutputFormat::Json => render_json(people)?,
            OutputFormat::Text => render_text(people, self.options.fields),
        };

        if buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }

        Ok(buf)
    }

    /// Render all people and write them to `out` in one go.
    pub fn write_to<W: Write>(
        &self,
        people: &[Person],
        out: &mut W,
    ) -> Result<WriteMetrics, WriterError> {
        let start_time = Instant::now();

        let buf = self.render(people)?;
        debug!(
            "Rendered {} records as {} ({} bytes)",
            people.len(),
            self.options.format,
            buf.len()
        );

        out.write_all(&buf)?;
        out.flush()?;

        let metrics = WriteMetrics {
            records_written: people.len() as u64,
            bytes_written: buf.len() as u64,
            total_duration: start_time.elapsed(),
        };

        info!(
            "Wrote {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}
