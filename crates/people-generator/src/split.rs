//! Splitting a record count into female and male buckets.

use crate::generator::GeneratorError;

/// Female/male percentages. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderSplit {
    female_percent: u8,
    male_percent: u8,
}

impl GenderSplit {
    /// Returns `None` unless both values are within 0..=100 and sum to 100.
    pub fn new(female_percent: u8, male_percent: u8) -> Option<Self> {
        if female_percent > 100 || u16::from(female_percent) + u16::from(male_percent) != 100 {
            return None;
        }
        Some(Self {
            female_percent,
            male_percent,
        })
    }

    pub fn even() -> Self {
        Self {
            female_percent: 50,
            male_percent: 50,
        }
    }

    pub fn all_female() -> Self {
        Self {
            female_percent: 100,
            male_percent: 0,
        }
    }

    pub fn all_male() -> Self {
        Self {
            female_percent: 0,
            male_percent: 100,
        }
    }

    pub fn female_percent(&self) -> u8 {
        self.female_percent
    }

    pub fn male_percent(&self) -> u8 {
        self.male_percent
    }

    /// Divide `total` into per-gender counts.
    ///
    /// Both counts are floored first; the remainder is then handed out one
    /// record at a time, male first, alternating.
    pub fn counts(&self, total: u64) -> Result<SplitCounts, GeneratorError> {
        // u128 keeps `total * percent` from overflowing near u64::MAX.
        let share = |percent: u8| (u128::from(total) * u128::from(percent) / 100) as u64;
        let mut counts = SplitCounts {
            female: share(self.female_percent),
            male: share(self.male_percent),
        };

        let mut male_turn = true;
        while counts.total() < u128::from(total) {
            if male_turn {
                counts.male += 1;
            } else {
                counts.female += 1;
            }
            male_turn = !male_turn;
        }

        if counts.total() != u128::from(total) {
            return Err(GeneratorError::SplitMismatch {
                total,
                female: counts.female,
                male: counts.male,
            });
        }

        Ok(counts)
    }
}

impl Default for GenderSplit {
    fn default() -> Self {
        Self::even()
    }
}

/// Record counts per gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitCounts {
    pub female: u64,
    pub male: u64,
}

impl SplitCounts {
    fn total(&self) -> u128 {
        u128::from(self.female) + u128::from(self.male)
    }
}
