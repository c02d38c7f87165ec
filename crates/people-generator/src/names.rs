//! Reference name lists.
//!
//! Each list is a flat text resource with one name per line. Names may be in
//! any case; they are normalized to capitalized form on load. The default
//! lists are compiled into the binary, and a directory holding files with
//! the same names can replace them.

use crate::generator::GeneratorError;
use std::path::Path;
use tracing::debug;

/// File name of the male first-name list.
pub const MALE_FIRST_NAMES_FILE: &str = "male_first_names.txt";
/// File name of the female first-name list.
pub const FEMALE_FIRST_NAMES_FILE: &str = "female_first_names.txt";
/// File name of the last-name list.
pub const LAST_NAMES_FILE: &str = "last_names.txt";

const BUNDLED_MALE_FIRST_NAMES: &str = include_str!("../data/male_first_names.txt");
const BUNDLED_FEMALE_FIRST_NAMES: &str = include_str!("../data/female_first_names.txt");
const BUNDLED_LAST_NAMES: &str = include_str!("../data/last_names.txt");

/// An immutable, non-empty list of capitalized names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Parse a list from text, one name per line. Blank lines are skipped.
    pub fn parse(source: &str, text: &str) -> Result<Self, GeneratorError> {
        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(capitalize)
            .collect();

        if names.is_empty() {
            return Err(GeneratorError::EmptyNameList(source.to_string()));
        }

        Ok(Self { names })
    }

    /// Load a list from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self, GeneratorError> {
        let text =
            std::fs::read_to_string(path).map_err(|source| GeneratorError::NameListRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&path.display().to_string(), &text)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

/// The three lists a run draws from.
#[derive(Debug, Clone)]
pub struct ReferenceLists {
    pub male_first: NameList,
    pub female_first: NameList,
    pub last: NameList,
}

impl ReferenceLists {
    /// Lists compiled into the binary.
    pub fn bundled() -> Result<Self, GeneratorError> {
        Ok(Self {
            male_first: NameList::parse(MALE_FIRST_NAMES_FILE, BUNDLED_MALE_FIRST_NAMES)?,
            female_first: NameList::parse(FEMALE_FIRST_NAMES_FILE, BUNDLED_FEMALE_FIRST_NAMES)?,
            last: NameList::parse(LAST_NAMES_FILE, BUNDLED_LAST_NAMES)?,
        })
    }

    /// Lists loaded from `dir`, which must contain all three files.
    pub fn from_dir(dir: &Path) -> Result<Self, GeneratorError> {
        debug!("Loading reference lists from '{}'", dir.display());
        Ok(Self {
            male_first: NameList::from_file(&dir.join(MALE_FIRST_NAMES_FILE))?,
            female_first: NameList::from_file(&dir.join(FEMALE_FIRST_NAMES_FILE))?,
            last: NameList::from_file(&dir.join(LAST_NAMES_FILE))?,
        })
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
