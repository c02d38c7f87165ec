//! The generation pipeline: load lists, split, draw, serialize, write.

use crate::config::RunConfig;
use anyhow::Context;
use people_generator::{Person, PersonGenerator, ReferenceLists};
use people_writer::{RecordWriter, WriteMetrics};
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

/// Load the configured reference lists and draw every record.
///
/// Records come back female bucket first, then male, each in draw order.
pub fn generate_people(config: &RunConfig) -> anyhow::Result<Vec<Person>> {
    let lists = match &config.data_dir {
        Some(dir) => ReferenceLists::from_dir(dir)
            .with_context(|| format!("Failed to load name lists from {dir:?}"))?,
        None => ReferenceLists::bundled().context("Failed to load bundled name lists")?,
    };
    info!(
        "Loaded {} male, {} female and {} last names",
        lists.male_first.len(),
        lists.female_first.len(),
        lists.last.len()
    );

    let counts = config.split.counts(config.total)?;
    info!(
        "Generating {} people: {} female ({}%), {} male ({}%)",
        config.total,
        counts.female,
        config.split.female_percent(),
        counts.male,
        config.split.male_percent()
    );

    let mut generator = match config.seed {
        Some(seed) => PersonGenerator::with_seed(lists, config.draw_options(), seed),
        None => PersonGenerator::new(lists, config.draw_options()),
    };

    Ok(generator.generate(counts)?)
}

/// Run the whole pipeline, writing to `--output` or stdout.
///
/// All records are drawn before the destination is opened, so a failure
/// leaves no partial output.
pub fn execute(config: &RunConfig) -> anyhow::Result<WriteMetrics> {
    let people = generate_people(config)?;
    let writer = RecordWriter::new(config.write_options());

    let metrics = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            writer
                .write_to(&people, &mut BufWriter::new(file))
                .with_context(|| format!("Failed to write {path:?}"))?
        }
        None => writer
            .write_to(&people, &mut std::io::stdout().lock())
            .context("Failed to write to stdout")?,
    };

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use chrono::NaiveDate;
    use clap::Parser;
    use people_generator::Gender;
    use tempfile::TempDir;

    fn config(args: &[&str]) -> RunConfig {
        let cli =
            Cli::try_parse_from(std::iter::once("peoplegen").chain(args.iter().copied())).unwrap();
        RunConfig::resolve(&cli, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()).unwrap()
    }

    #[test]
    fn test_generate_people_split() {
        let people = generate_people(&config(&["--seed", "42", "--female", "30", "10"])).unwrap();

        assert_eq!(people.len(), 10);
        assert_eq!(
            people.iter().filter(|p| p.gender == Gender::Female).count(),
            3
        );
        assert!(people[..3].iter().all(|p| p.gender == Gender::Female));
        assert!(people[3..].iter().all(|p| p.gender == Gender::Male));
    }

    #[test]
    fn test_generate_people_zero() {
        let people = generate_people(&config(&["0"])).unwrap();
        assert!(people.is_empty());
    }

    #[test]
    fn test_generate_people_from_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("male_first_names.txt"), "OTTO\n").unwrap();
        std::fs::write(temp_dir.path().join("female_first_names.txt"), "ANNA\n").unwrap();
        std::fs::write(temp_dir.path().join("last_names.txt"), "HANNAH\n").unwrap();
        let dir = temp_dir.path().to_str().unwrap();

        let people = generate_people(&config(&["--data-dir", dir, "4"])).unwrap();

        assert_eq!(people.len(), 4);
        assert!(people.iter().all(|p| p.last_name == "Hannah"));
        assert!(people.iter().all(|p| p.first_name == p.middle_name));
        assert!(people
            .iter()
            .all(|p| ["Anna", "Otto"].contains(&p.first_name.as_str())));
    }

    #[test]
    fn test_generate_people_missing_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("missing");

        let result = generate_people(&config(&["--data-dir", dir.to_str().unwrap(), "4"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("people.json");

        let metrics = execute(&config(&["--ssn", "-o", output.to_str().unwrap(), "6"])).unwrap();

        assert_eq!(metrics.records_written, 6);
        let content = std::fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 6);
        assert!(array.iter().all(|p| p.get("ssn").is_some()));
    }
}
