//! Birth date generation.

use chrono::{Days, Months, NaiveDate};
use rand::Rng;

/// How far back the default birth window reaches.
pub const DEFAULT_WINDOW_YEARS: u32 = 100;

/// Inclusive calendar window birth dates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl BirthWindow {
    /// Returns `None` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// `[today - years, today]`. Feb 29 clamps to Feb 28 in non-leap years.
    pub fn years_before(today: NaiveDate, years: u32) -> Option<Self> {
        let start = today.checked_sub_months(Months::new(years.checked_mul(12)?))?;
        Self::new(start, today)
    }

    /// The default window, optionally narrowed to whole calendar years.
    ///
    /// `min_year` moves the start to Jan 1 of that year and `max_year` moves
    /// the end to Dec 31 of that year.
    pub fn with_year_bounds(
        today: NaiveDate,
        min_year: Option<i32>,
        max_year: Option<i32>,
    ) -> Option<Self> {
        let default = Self::years_before(today, DEFAULT_WINDOW_YEARS)?;
        let start = match min_year {
            Some(year) => NaiveDate::from_ymd_opt(year, 1, 1)?,
            None => default.start,
        };
        let end = match max_year {
            Some(year) => NaiveDate::from_ymd_opt(year, 12, 31)?,
            None => default.end,
        };
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    fn span_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs()
    }
}

/// Generate a uniformly random date within the window (inclusive).
pub fn generate_birth_date<R: Rng>(rng: &mut R, window: BirthWindow) -> NaiveDate {
    let offset = rng.gen_range(0..=window.span_days());
    window
        .start
        .checked_add_days(Days::new(offset))
        .unwrap_or(window.end)
}
