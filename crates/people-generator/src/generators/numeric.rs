//! Salary generation.

use rand::Rng;

/// Inclusive salary bounds. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    low: u64,
    high: u64,
}

impl SalaryRange {
    /// Returns `None` when `low > high`.
    pub fn new(low: u64, high: u64) -> Option<Self> {
        (low <= high).then_some(Self { low, high })
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Generate a random salary in the range (inclusive).
pub fn generate_salary<R: Rng>(rng: &mut R, range: SalaryRange) -> u64 {
    rng.gen_range(range.low..=range.high)
}
