//! The generated person record and its optional field set.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Gender tag attached to every generated person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Single-letter tag written to every output format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male => "M",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One synthesized person.
///
/// `ssn` and `salary` are only populated when the run enables them, and are
/// omitted from JSON output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<u64>,
}

/// Which optional fields a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub ssn: bool,
    pub salary: bool,
}

impl FieldSet {
    /// Column names in output order.
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut columns = vec!["firstName", "middleName", "lastName", "gender", "birthDate"];
        if self.ssn {
            columns.push("ssn");
        }
        if self.salary {
            columns.push("salary");
        }
        columns
    }
}
