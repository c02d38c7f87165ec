//! Resolution of raw CLI flags into an immutable run configuration.

use crate::cli::Cli;
use chrono::NaiveDate;
use people_generator::{BirthWindow, DrawOptions, GenderSplit, SalaryRange};
use people_writer::{OutputFormat, WriteOptions};
use std::path::PathBuf;

/// Errors raised while resolving the command line.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A percentage was not a plain decimal integer
    #[error("Non-numeric argument to {option}: \"{value}\"")]
    NonNumericPercent { option: &'static str, value: String },

    /// A percentage was above 100
    #[error("Invalid percentage value for {option}: {value}")]
    PercentOutOfRange { option: &'static str, value: String },

    /// Both percentages were given and do not add up to 100
    #[error("Male and female percentage values don't add up to 100 ({male} + {female})")]
    PercentSum { female: u8, male: u8 },

    /// The total was not a non-negative integer
    #[error("Bad value for <TOTAL>: \"{0}\"")]
    InvalidTotal(String),

    /// The salary range was malformed or inverted
    #[error("Bad range for --salary: \"{0}\" (expected LOWER-UPPER with LOWER <= UPPER)")]
    InvalidSalaryRange(String),

    /// The separator was empty or contained a quote or line break
    #[error("Separator must be non-empty and free of quotes and line breaks, got {0:?}")]
    InvalidSeparator(String),

    /// --yearmin / --yearmax do not form a usable window
    #[error("Invalid birth year window: --yearmin {min:?}, --yearmax {max:?}")]
    InvalidBirthWindow { min: Option<i32>, max: Option<i32> },
}

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub split: GenderSplit,
    pub total: u64,
    pub format: OutputFormat,
    /// CSV field separator, one or more characters
    pub separator: String,
    pub header: bool,
    pub ssn: bool,
    pub salary: Option<SalaryRange>,
    pub birth_window: BirthWindow,
    pub seed: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl RunConfig {
    /// Resolve and validate the raw flags. `today` anchors the birth window.
    pub fn resolve(cli: &Cli, today: NaiveDate) -> Result<Self, ConfigError> {
        let split = resolve_split(cli)?;
        let total = parse_total(&cli.total)?;
        let separator = parse_separator(&cli.sep)?;
        let salary = cli.salary.as_deref().map(parse_salary_range).transpose()?;
        let birth_window = BirthWindow::with_year_bounds(today, cli.yearmin, cli.yearmax);
        let birth_window = birth_window.ok_or(ConfigError::InvalidBirthWindow {
            min: cli.yearmin,
            max: cli.yearmax,
        })?;
        let format = cli
            .format
            .or_else(|| cli.output.as_deref().and_then(OutputFormat::from_path))
            .unwrap_or_default();

        Ok(Self {
            split,
            total,
            format,
            separator,
            header: cli.header,
            ssn: cli.ssn,
            salary,
            birth_window,
            seed: cli.seed,
            data_dir: cli.data_dir.clone(),
            output: cli.output.clone(),
        })
    }

    /// Per-record options for the generator.
    pub fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            ssn: self.ssn,
            salary: self.salary,
            birth_window: self.birth_window,
        }
    }

    /// Layout options for the writer.
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            format: self.format,
            delimiter: self.separator.clone(),
            header: self.header,
            fields: self.draw_options().field_set(),
        }
    }
}

/// Apply the percentage rules: -f/-m win outright, a single percentage
/// implies the other, neither means 50/50, and both must sum to 100.
fn resolve_split(cli: &Cli) -> Result<GenderSplit, ConfigError> {
    if cli.only_female {
        return Ok(GenderSplit::all_female());
    }
    if cli.only_male {
        return Ok(GenderSplit::all_male());
    }

    let female = cli
        .female
        .as_deref()
        .map(|v| parse_percent("--female", v))
        .transpose()?;
    let male = cli
        .male
        .as_deref()
        .map(|v| parse_percent("--male", v))
        .transpose()?;

    let (female, male) = match (female, male) {
        (None, None) => return Ok(GenderSplit::even()),
        (Some(female), None) => (female, 100 - female),
        (None, Some(male)) => (100 - male, male),
        (Some(female), Some(male)) => (female, male),
    };

    GenderSplit::new(female, male).ok_or(ConfigError::PercentSum { female, male })
}

fn parse_percent(option: &'static str, value: &str) -> Result<u8, ConfigError> {
    if !is_digits(value) {
        return Err(ConfigError::NonNumericPercent {
            option,
            value: value.to_string(),
        });
    }
    value
        .parse::<u8>()
        .ok()
        .filter(|pct| *pct <= 100)
        .ok_or_else(|| ConfigError::PercentOutOfRange {
            option,
            value: value.to_string(),
        })
}

fn parse_total(value: &str) -> Result<u64, ConfigError> {
    if !is_digits(value) {
        return Err(ConfigError::InvalidTotal(value.to_string()));
    }
    value
        .parse()
        .map_err(|_| ConfigError::InvalidTotal(value.to_string()))
}

fn parse_salary_range(value: &str) -> Result<SalaryRange, ConfigError> {
    let invalid = || ConfigError::InvalidSalaryRange(value.to_string());

    let (low, high) = value.split_once('-').ok_or_else(invalid)?;
    if !is_digits(low) || !is_digits(high) {
        return Err(invalid());
    }
    let low: u64 = low.parse().map_err(|_| invalid())?;
    let high: u64 = high.parse().map_err(|_| invalid())?;

    SalaryRange::new(low, high).ok_or_else(invalid)
}

/// Any non-empty string works as a separator, except one holding the quote
/// character or a line break, which would make quoted fields ambiguous.
fn parse_separator(value: &str) -> Result<String, ConfigError> {
    if value.is_empty() || value.contains(['"', '\r', '\n']) {
        return Err(ConfigError::InvalidSeparator(value.to_string()));
    }
    Ok(value.to_string())
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
