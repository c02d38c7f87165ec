//! Person record generator for peoplegen.
//!
//! This crate loads the reference name lists, splits a requested record
//! count between genders, and draws random person records.
//!
//! # Architecture
//!
//! ```text
//!   ReferenceLists        GenderSplit ── counts(total) ──┐
//!   (male, female, last)                                 │
//!          │                                             ▼
//!          ▼                                       SplitCounts
//! ┌──────────────────┐                                   │
//! │ PersonGenerator  │◀──────────── generate() ──────────┘
//! │                  │
//! │  - lists         │
//! │  - DrawOptions   │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Vec<Person>  (female bucket, then male bucket)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use people_generator::{BirthWindow, DrawOptions, GenderSplit, PersonGenerator, ReferenceLists};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let options = DrawOptions::new(BirthWindow::years_before(today, 100).unwrap());
//! let mut generator = PersonGenerator::with_seed(ReferenceLists::bundled().unwrap(), options, 42);
//!
//! let counts = GenderSplit::even().counts(10).unwrap();
//! let people = generator.generate(counts).unwrap();
//! assert_eq!(people.len(), 10);
//! ```

pub mod generator;
pub mod generators;
pub mod names;
pub mod person;
pub mod split;

// Re-exports for convenience
pub use generator::{DrawOptions, GeneratorError, PersonGenerator, PersonIterator};
pub use generators::{BirthWindow, SalaryRange};
pub use names::{NameList, ReferenceLists};
pub use person::{FieldSet, Gender, Person};
pub use split::{GenderSplit, SplitCounts};
