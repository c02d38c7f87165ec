//! Individual value generators for the optional and derived person fields.

pub mod date;
pub mod numeric;
pub mod ssn;

pub use date::BirthWindow;
pub use numeric::SalaryRange;
