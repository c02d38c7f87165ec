//! Command-line argument definitions.

use clap::Parser;
use people_writer::OutputFormat;
use std::path::PathBuf;

/// Raw command-line flags, before resolution into a `RunConfig`.
///
/// Percentages, the total, and the salary range are kept as strings here so
/// the resolver can report malformed values with its own messages.
///
/// [`RunConfig`]: crate::config::RunConfig
#[derive(Parser, Clone, Debug)]
#[command(name = "peoplegen")]
#[command(version)]
#[command(about = "Generate random people data for test fixtures and demos")]
#[command(
    long_about = "Generate random people data for test fixtures and demos.\n\n\
    If only one of --male and --female is given, the other is computed. For \
    instance, --female 25 means 25% females and 75% males."
)]
pub struct Cli {
    /// Generate only female names
    #[arg(short = 'f', conflicts_with_all = ["only_male", "male", "female"])]
    pub only_female: bool,

    /// Generate only male names
    #[arg(short = 'm', conflicts_with_all = ["male", "female"])]
    pub only_male: bool,

    /// Percentage of names that should be female (default: 50)
    #[arg(long, value_name = "PCT")]
    pub female: Option<String>,

    /// Percentage of names that should be male (default: 50)
    #[arg(long, value_name = "PCT")]
    pub male: Option<String>,

    /// Output format (default: csv, or implied by the --output extension)
    #[arg(short = 'F', long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// CSV field separator, one or more characters
    #[arg(short = 's', long = "sep", default_value = ",", value_name = "SEP")]
    pub sep: String,

    /// Emit a header row when the output is CSV
    #[arg(long)]
    pub header: bool,

    /// Generate synthetic social security numbers
    #[arg(long)]
    pub ssn: bool,

    /// Generate salaries in the inclusive range LOWER-UPPER
    #[arg(long, value_name = "LOWER-UPPER")]
    pub salary: Option<String>,

    /// Earliest birth year (default: 100 years before today)
    #[arg(long, value_name = "YEAR")]
    pub yearmin: Option<i32>,

    /// Latest birth year (default: today)
    #[arg(long, value_name = "YEAR")]
    pub yearmax: Option<i32>,

    /// Random seed for reproducible output (same seed = same people)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding male_first_names.txt, female_first_names.txt and
    /// last_names.txt (default: the bundled lists)
    #[arg(long, value_name = "DIR", env = "PEOPLEGEN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Total number of people to generate
    #[arg(value_name = "TOTAL")]
    pub total: String,
}
