//! peoplegen library
//!
//! Generates random person records (first, middle and last name, gender,
//! birth date, and optionally a synthetic SSN and a salary) from reference
//! name lists, and writes them as CSV, JSON, or plain text.
//!
//! # Crates
//!
//! - `people_generator` - reference lists, gender split, record drawing
//! - `people_writer` - CSV, JSON and text serializers
//!
//! # CLI Usage
//!
//! ```bash
//! # 100 people, half female, as CSV on stdout
//! peoplegen 100
//!
//! # 25% female, with SSNs and salaries, as JSON
//! peoplegen --female 25 --ssn --salary 30000-120000 -F json 1000
//!
//! # Semicolon-separated with a header row, reproducible
//! peoplegen -s ";" --header --seed 42 10 -o people.csv
//! ```

pub mod cli;
pub mod config;
pub mod run;

pub use cli::Cli;
pub use config::{ConfigError, RunConfig};
pub use run::{execute, generate_people};
