//! Serializers for generated person records.
//!
//! Records can be written as delimited text (via the `csv` crate), as a JSON
//! array (via `serde_json`), or as plain human-readable lines. The whole
//! record set is rendered into memory and written once.
//!
//! # Example
//!
//! ```ignore
//! use people_writer::{OutputFormat, RecordWriter, WriteOptions};
//!
//! let writer = RecordWriter::new(WriteOptions {
//!     format: OutputFormat::Json,
//!     ..WriteOptions::default()
//! });
//! let metrics = writer.write_to(&people, &mut std::io::stdout().lock())?;
//! ```

mod delimited;
mod error;
mod format;
mod json;
mod text;
mod writer;

pub use error::WriterError;
pub use format::OutputFormat;
pub use writer::{RecordWriter, WriteMetrics, WriteOptions};
